//! Session view models
//!
//! Render-ready data handed out by the state manager. Everything here is an
//! owned copy: renderers never see the live session state.

use crate::cart::CartLine;
use crate::commerce::{AdminStats, CheckoutReceipt};
use crate::notification::Notification;
use serde::Serialize;

/// Message returned for checkout failures where no answer came back
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Snapshot of the session for one render pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionView {
    pub lines: Vec<CartLine>,
    pub total_price: f64,
    pub stats: Option<AdminStats>,
    pub notification: Option<Notification>,
    pub checkout_in_progress: bool,
}

impl SessionView {
    pub fn is_cart_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What became of a checkout attempt
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The order went through and the cart was cleared.
    Placed(CheckoutReceipt),

    /// The backend refused or could not be reached; the cart is untouched.
    Failed {
        /// Backend error text, or [`NETWORK_ERROR_MESSAGE`]
        message: Option<String>,
    },

    /// Another checkout for this session is still in flight.
    AlreadyInProgress,
}

impl CheckoutOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// Discount-specific message for display next to the discount input.
    ///
    /// A discounted order reports the savings; a failure is shown only when
    /// its text contains the lowercase word "discount".
    pub fn inline_message(&self) -> Option<String> {
        match self {
            Self::Placed(receipt) if receipt.discount_applied => receipt
                .discount_amount
                .map(|amount| format!("Discount applied! You saved ${amount:.2}")),
            Self::Failed {
                message: Some(message),
            } if message.contains("discount") => Some(message.clone()),
            _ => None,
        }
    }
}
