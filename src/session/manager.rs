//! Cart State Manager
//!
//! [`Storefront`] owns the session state (cart, admin stats, notification)
//! and is the only thing allowed to mutate it. Additions go to the backend
//! first and are reflected locally only once confirmed. Quantity changes and
//! removals are local only and never reach the backend.
//!
//! Operations take `&self` so the renderer can keep taking snapshots while a
//! request is suspended. The state lock is never held across an `.await`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Duration;
use tracing::{debug, error, info, warn};

use super::models::{CheckoutOutcome, SessionView, NETWORK_ERROR_MESSAGE};
use crate::cart::helpers::{format_item_summary, format_price};
use crate::cart::{Cart, CartLine};
use crate::catalog::{Catalog, Product};
use crate::clock::{Clock, SystemClock};
use crate::commerce::{AddItemRequest, AdminStats, CheckoutRequest, CommerceApi, CommerceError};
use crate::notification::{Notification, NotificationSlot};

/// Mutable state of one storefront session
#[derive(Debug, Default)]
struct SessionState {
    cart: Cart,
    stats: Option<AdminStats>,
    notification: NotificationSlot,
}

/// Clears the checkout-in-flight flag when dropped, including when the
/// checkout future itself is dropped mid-request.
struct CheckoutGuard<'a>(&'a AtomicBool);

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The storefront session: catalog, cart and admin view over a commerce
/// backend.
pub struct Storefront<C, K = SystemClock> {
    api: C,
    clock: K,
    catalog: Catalog,
    state: Mutex<SessionState>,
    checkout_in_flight: AtomicBool,
}

impl<C: CommerceApi> Storefront<C, SystemClock> {
    /// Creates a session reading wall-clock time
    pub fn new(api: C, catalog: Catalog) -> Self {
        Self::with_clock(api, catalog, SystemClock)
    }
}

impl<C: CommerceApi, K: Clock> Storefront<C, K> {
    pub fn with_clock(api: C, catalog: Catalog, clock: K) -> Self {
        Self {
            api,
            clock,
            catalog,
            state: Mutex::new(SessionState::default()),
            checkout_in_flight: AtomicBool::new(false),
        }
    }

    /// Replaces the notification time-to-live (five seconds by default)
    #[must_use]
    pub fn with_notification_ttl(self, ttl: Duration) -> Self {
        self.lock().notification = NotificationSlot::new(ttl);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, notification: Notification) {
        let now = self.clock.now();
        self.lock().notification.set(notification, now);
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Mount trigger: loads the initial admin stats snapshot.
    pub async fn open(&self) {
        info!(products = self.catalog.len(), "Opening storefront session");
        self.refresh_stats().await;
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Adds one unit of `product` once the backend has accepted it.
    ///
    /// On failure the cart is left as it was and a single error notification
    /// is armed.
    pub async fn add_item(&self, product: &Product) {
        let request = AddItemRequest::for_product(product);

        match self.api.add_item(&request).await {
            Ok(_) => {
                self.lock().cart.add_one(product);
                debug!(product_id = product.id, "Cart line confirmed");
                self.notify(Notification::success(format!(
                    "{} added to cart!",
                    product.name
                )));
            }
            Err(err) => {
                error!(product_id = product.id, error = %err, "Failed to add item to cart");
                let text = match &err {
                    CommerceError::Rejected { message, .. } => message
                        .clone()
                        .unwrap_or_else(|| "Failed to add item to cart".to_string()),
                    CommerceError::Network(_) | CommerceError::Malformed(_) => {
                        "Error adding item to cart".to_string()
                    }
                };
                self.notify(Notification::error(text));
            }
        }
    }

    /// Adds the catalog product with `product_id`.
    ///
    /// Returns false, without contacting the backend, if the id is not in the
    /// catalog.
    pub async fn add_item_by_id(&self, product_id: u32) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            return false;
        };
        self.add_item(product).await;
        true
    }

    /// Deletes the line for `product_id`. Local only; always succeeds.
    pub fn remove_item(&self, product_id: u32) {
        let removed = self.lock().cart.remove(product_id);
        debug!(product_id, removed, "Cart line removed locally");
        self.notify(Notification::success("Item removed from cart"));
    }

    /// Overwrites the quantity of a line. Local only, no notification.
    ///
    /// Zero or less behaves exactly like [`Storefront::remove_item`].
    pub fn set_quantity(&self, product_id: u32, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        self.lock().cart.set_quantity(product_id, quantity);
    }

    /// One more unit of an existing line
    pub fn increment(&self, product_id: u32) {
        self.adjust(product_id, 1);
    }

    /// One fewer unit of an existing line, removing it at zero
    pub fn decrement(&self, product_id: u32) {
        self.adjust(product_id, -1);
    }

    fn adjust(&self, product_id: u32, delta: i64) {
        let current = self.lock().cart.line(product_id).map(|l| l.quantity);
        if let Some(quantity) = current {
            self.set_quantity(product_id, i64::from(quantity) + delta);
        }
    }

    /// Places the order, optionally with a discount code.
    ///
    /// The code is trimmed before it is sent. Only one checkout may be in
    /// flight per session; a second call while one is pending returns
    /// [`CheckoutOutcome::AlreadyInProgress`] without contacting the backend.
    pub async fn checkout(&self, discount_code: &str) -> CheckoutOutcome {
        let Some(_guard) = self.try_begin_checkout() else {
            warn!("Checkout already in progress");
            return CheckoutOutcome::AlreadyInProgress;
        };

        let request = CheckoutRequest::new(discount_code);
        match self.api.checkout(&request).await {
            Ok(receipt) => {
                let summary = {
                    let mut state = self.lock();
                    let summary = format_item_summary(state.cart.lines());
                    state.cart.clear();
                    summary
                };
                info!(items = %summary, discount_applied = receipt.discount_applied, "Order placed");

                let mut text = String::from("Order placed successfully!");
                if receipt.discount_applied {
                    let amount = receipt.discount_amount.unwrap_or_default();
                    text.push_str(&format!(" Discount applied: {amount:.2}"));
                }
                self.notify(Notification::success(text));

                self.refresh_stats().await;
                CheckoutOutcome::Placed(receipt)
            }
            Err(err) => {
                error!(error = %err, "Checkout failed");
                let (text, message) = match err {
                    CommerceError::Rejected { message, .. } => (
                        message.clone().unwrap_or_else(|| "Checkout failed".to_string()),
                        message,
                    ),
                    CommerceError::Network(_) | CommerceError::Malformed(_) => (
                        "Error during checkout".to_string(),
                        Some(NETWORK_ERROR_MESSAGE.to_string()),
                    ),
                };
                self.notify(Notification::error(text));
                CheckoutOutcome::Failed { message }
            }
        }
    }

    fn try_begin_checkout(&self) -> Option<CheckoutGuard<'_>> {
        self.checkout_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CheckoutGuard(&self.checkout_in_flight))
    }

    pub fn is_checkout_in_progress(&self) -> bool {
        self.checkout_in_flight.load(Ordering::Acquire)
    }

    // =========================================================================
    // Admin operations
    // =========================================================================

    /// Replaces the admin stats snapshot. Failures keep the stale snapshot
    /// and raise no notification.
    pub async fn refresh_stats(&self) {
        match self.api.fetch_admin_stats().await {
            Ok(stats) => {
                debug!(
                    total_items = stats.total_items_purchased,
                    codes = stats.discount_codes.len(),
                    "Admin stats refreshed"
                );
                self.lock().stats = Some(stats);
            }
            Err(err) => warn!(error = %err, "Error fetching admin stats"),
        }
    }

    /// Asks the backend for a new discount code and announces it.
    pub async fn generate_discount_code(&self) {
        match self.api.generate_discount_code().await {
            Ok(generated) => {
                let code = generated.code().unwrap_or("N/A").to_string();
                info!(code = %code, "Discount code generated");
                self.notify(Notification::success(format!(
                    "Discount code generated: {code}"
                )));
                self.refresh_stats().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to generate discount code");
                let text = match &err {
                    CommerceError::Rejected { message, .. } => message
                        .clone()
                        .unwrap_or_else(|| "Failed to generate discount code".to_string()),
                    CommerceError::Network(_) | CommerceError::Malformed(_) => {
                        "Error generating discount code".to_string()
                    }
                };
                self.notify(Notification::error(text));
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Sum of `price * quantity` over the current lines; never cached.
    pub fn total_price(&self) -> f64 {
        self.lock().cart.total_price()
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.lock().cart.lines().to_vec()
    }

    pub fn stats(&self) -> Option<AdminStats> {
        self.lock().stats.clone()
    }

    /// The notification still within its time-to-live, if any
    pub fn notification(&self) -> Option<Notification> {
        let now = self.clock.now();
        self.lock().notification.visible(now).cloned()
    }

    /// Text of the visible notification; empty once it has expired
    pub fn notification_text(&self) -> String {
        let now = self.clock.now();
        self.lock().notification.text(now).to_string()
    }

    /// Everything a render pass needs, copied out of the session
    pub fn snapshot(&self) -> SessionView {
        let now = self.clock.now();
        let state = self.lock();
        SessionView {
            lines: state.cart.lines().to_vec(),
            total_price: state.cart.total_price(),
            stats: state.stats.clone(),
            notification: state.notification.visible(now).cloned(),
            checkout_in_progress: self.is_checkout_in_progress(),
        }
    }

    /// Formatted cart total, as shown under the cart
    pub fn display_total(&self) -> String {
        format_price(self.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::commerce::{
        AddItemConfirmation, CheckoutReceipt, DiscountCode, GeneratedDiscount,
    };
    use crate::notification::NotificationKind;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Scripted commerce backend. Each queue is consumed front to back;
    /// an empty queue answers with success.
    #[derive(Default)]
    struct FakeCommerce {
        add_results: Mutex<VecDeque<Result<AddItemConfirmation, CommerceError>>>,
        checkout_results: Mutex<VecDeque<Result<CheckoutReceipt, CommerceError>>>,
        stats_results: Mutex<VecDeque<Result<AdminStats, CommerceError>>>,
        generate_results: Mutex<VecDeque<Result<GeneratedDiscount, CommerceError>>>,
        add_requests: Mutex<Vec<AddItemRequest>>,
        checkout_requests: Mutex<Vec<CheckoutRequest>>,
        stats_calls: AtomicUsize,
        checkout_gate: Option<Arc<Notify>>,
    }

    impl FakeCommerce {
        fn push_add(&self, result: Result<AddItemConfirmation, CommerceError>) {
            self.add_results.lock().unwrap().push_back(result);
        }

        fn push_checkout(&self, result: Result<CheckoutReceipt, CommerceError>) {
            self.checkout_results.lock().unwrap().push_back(result);
        }

        fn push_stats(&self, result: Result<AdminStats, CommerceError>) {
            self.stats_results.lock().unwrap().push_back(result);
        }

        fn push_generate(&self, result: Result<GeneratedDiscount, CommerceError>) {
            self.generate_results.lock().unwrap().push_back(result);
        }

        fn stats_calls(&self) -> usize {
            self.stats_calls.load(Ordering::SeqCst)
        }
    }

    impl CommerceApi for FakeCommerce {
        async fn add_item(
            &self,
            request: &AddItemRequest,
        ) -> Result<AddItemConfirmation, CommerceError> {
            self.add_requests.lock().unwrap().push(request.clone());
            let next = self.add_results.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(AddItemConfirmation::default()))
        }

        async fn checkout(
            &self,
            request: &CheckoutRequest,
        ) -> Result<CheckoutReceipt, CommerceError> {
            self.checkout_requests.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.checkout_gate {
                gate.notified().await;
            }
            let next = self.checkout_results.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(CheckoutReceipt::default()))
        }

        async fn fetch_admin_stats(&self) -> Result<AdminStats, CommerceError> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            let next = self.stats_results.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(AdminStats::default()))
        }

        async fn generate_discount_code(&self) -> Result<GeneratedDiscount, CommerceError> {
            let next = self.generate_results.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(GeneratedDiscount::default()))
        }
    }

    fn storefront() -> (Storefront<FakeCommerce, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let storefront =
            Storefront::with_clock(FakeCommerce::default(), Catalog::demo(), clock.clone());
        (storefront, clock)
    }

    fn rejected(message: &str) -> CommerceError {
        CommerceError::Rejected {
            status: 400,
            message: Some(message.to_string()),
        }
    }

    #[tokio::test]
    async fn adding_twice_yields_one_line_with_quantity_two() {
        let (storefront, _) = storefront();
        let laptop = storefront.catalog().get(1).unwrap().clone();

        storefront.add_item(&laptop).await;
        storefront.add_item(&laptop).await;

        let lines = storefront.cart_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(storefront.notification_text(), "Laptop added to cart!");

        let requests = storefront.api().add_requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.quantity == 1 && r.item_id == "1"));
    }

    #[tokio::test]
    async fn rejected_add_leaves_cart_untouched() {
        let (storefront, _) = storefront();
        storefront.add_item_by_id(2).await;
        let before = storefront.cart_lines();

        storefront.api().push_add(Err(rejected("Out of stock")));
        storefront.add_item_by_id(1).await;

        assert_eq!(storefront.cart_lines(), before);
        let notification = storefront.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, "Out of stock");
    }

    #[tokio::test]
    async fn add_failures_fall_back_to_generic_text() {
        let (storefront, _) = storefront();

        storefront.api().push_add(Err(CommerceError::Rejected {
            status: 500,
            message: None,
        }));
        storefront.add_item_by_id(1).await;
        assert_eq!(storefront.notification_text(), "Failed to add item to cart");

        storefront
            .api()
            .push_add(Err(CommerceError::Network("connection refused".into())));
        storefront.add_item_by_id(1).await;
        assert_eq!(storefront.notification_text(), "Error adding item to cart");

        assert!(storefront.cart_lines().is_empty());
    }

    #[tokio::test]
    async fn unknown_product_id_is_not_sent() {
        let (storefront, _) = storefront();
        assert!(!storefront.add_item_by_id(99).await);
        assert!(storefront.api().add_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_quantity_matches_remove_for_every_id() {
        let (by_quantity, _) = storefront();
        let (by_remove, _) = storefront();
        for s in [&by_quantity, &by_remove] {
            s.add_item_by_id(1).await;
            s.add_item_by_id(3).await;
        }

        for id in [1, 3, 42] {
            by_quantity.set_quantity(id, 0);
            by_remove.remove_item(id);
            assert_eq!(by_quantity.cart_lines(), by_remove.cart_lines());
            assert_eq!(by_quantity.notification(), by_remove.notification());
        }
        assert!(by_quantity.cart_lines().is_empty());
    }

    #[tokio::test]
    async fn quantity_changes_are_local_only() {
        let (storefront, _) = storefront();
        storefront.add_item_by_id(3).await;
        storefront.add_item_by_id(1).await;

        storefront.set_quantity(3, 2);
        storefront.increment(1);
        storefront.decrement(1);
        storefront.increment(77);

        assert_eq!(storefront.api().add_requests.lock().unwrap().len(), 2);
        assert!((storefront.total_price() - 1399.97).abs() < 1e-9);
        assert_eq!(storefront.display_total(), "$1399.97");

        storefront.decrement(1);
        assert_eq!(storefront.cart_lines().len(), 1);
        assert_eq!(storefront.notification_text(), "Item removed from cart");
    }

    #[tokio::test]
    async fn huge_quantity_then_add_does_not_overflow() {
        let (storefront, _) = storefront();
        storefront.add_item_by_id(1).await;
        storefront.set_quantity(1, 99_999_999_999);
        assert_eq!(storefront.cart_lines()[0].quantity, u32::MAX);

        storefront.add_item_by_id(1).await;
        storefront.increment(1);

        assert_eq!(storefront.cart_lines()[0].quantity, u32::MAX);
        assert_eq!(storefront.notification_text(), "Laptop added to cart!");
    }

    #[tokio::test]
    async fn successful_checkout_clears_cart_and_refreshes_stats_once() {
        let (storefront, _) = storefront();
        storefront.add_item_by_id(1).await;
        storefront.add_item_by_id(6).await;

        storefront.api().push_checkout(Ok(CheckoutReceipt {
            discount_applied: true,
            discount_amount: Some(179.998),
            ..Default::default()
        }));
        storefront.api().push_stats(Ok(AdminStats {
            total_items_purchased: 2,
            ..Default::default()
        }));

        let outcome = storefront.checkout("  SAVE10  ").await;

        assert!(outcome.is_placed());
        assert!(storefront.cart_lines().is_empty());
        assert_eq!(storefront.api().stats_calls(), 1);
        assert_eq!(storefront.stats().unwrap().total_items_purchased, 2);
        assert_eq!(
            storefront.notification_text(),
            "Order placed successfully! Discount applied: 180.00"
        );
        let sent = storefront.api().checkout_requests.lock().unwrap().clone();
        assert_eq!(sent, vec![CheckoutRequest::new("SAVE10")]);
        assert_eq!(sent[0].discount_code, "SAVE10");
    }

    #[tokio::test]
    async fn checkout_without_discount_has_plain_message() {
        let (storefront, _) = storefront();
        let outcome = storefront.checkout("").await;

        assert!(outcome.is_placed());
        assert_eq!(storefront.notification_text(), "Order placed successfully!");
        assert_eq!(
            storefront.api().checkout_requests.lock().unwrap()[0].discount_code,
            ""
        );
    }

    #[tokio::test]
    async fn failed_checkout_keeps_cart_and_returns_detail() {
        let (storefront, _) = storefront();
        storefront.add_item_by_id(2).await;
        storefront
            .api()
            .push_checkout(Err(rejected("Invalid discount code")));

        let outcome = storefront.checkout("BOGUS").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Failed {
                message: Some("Invalid discount code".into())
            }
        );
        assert_eq!(outcome.inline_message().as_deref(), Some("Invalid discount code"));
        assert_eq!(storefront.cart_lines().len(), 1);
        assert_eq!(storefront.api().stats_calls(), 0);
        assert!(storefront.notification().unwrap().is_error());
    }

    #[tokio::test]
    async fn network_checkout_failure_reports_network_error() {
        let (storefront, _) = storefront();
        storefront
            .api()
            .push_checkout(Err(CommerceError::Network("reset".into())));

        let outcome = storefront.checkout("").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Failed {
                message: Some(NETWORK_ERROR_MESSAGE.into())
            }
        );
        assert_eq!(storefront.notification_text(), "Error during checkout");
    }

    #[tokio::test]
    async fn rejected_checkout_without_text_uses_fallback() {
        let (storefront, _) = storefront();
        storefront.api().push_checkout(Err(CommerceError::Rejected {
            status: 502,
            message: None,
        }));

        let outcome = storefront.checkout("").await;

        assert_eq!(outcome, CheckoutOutcome::Failed { message: None });
        assert_eq!(storefront.notification_text(), "Checkout failed");
    }

    #[tokio::test]
    async fn concurrent_checkout_is_refused() {
        let gate = Arc::new(Notify::new());
        let api = FakeCommerce {
            checkout_gate: Some(gate.clone()),
            ..Default::default()
        };
        let storefront = Storefront::with_clock(api, Catalog::demo(), ManualClock::default());

        let (first, second, in_flight) = futures_util::join!(
            storefront.checkout("A"),
            storefront.checkout("B"),
            async {
                let busy = storefront.snapshot().checkout_in_progress;
                gate.notify_one();
                busy
            }
        );

        assert!(first.is_placed());
        assert_eq!(second, CheckoutOutcome::AlreadyInProgress);
        assert!(in_flight);
        assert!(!storefront.is_checkout_in_progress());
        assert_eq!(storefront.api().checkout_requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_stats_refresh_keeps_stale_snapshot_silently() {
        let (storefront, _) = storefront();
        storefront.api().push_stats(Ok(AdminStats {
            total_items_purchased: 7,
            ..Default::default()
        }));
        storefront.open().await;

        storefront
            .api()
            .push_stats(Err(CommerceError::Network("down".into())));
        storefront.refresh_stats().await;

        assert_eq!(storefront.stats().unwrap().total_items_purchased, 7);
        assert!(storefront.notification().is_none());
    }

    #[tokio::test]
    async fn generated_code_is_announced_and_stats_refreshed() {
        let (storefront, _) = storefront();
        storefront.api().push_generate(Ok(GeneratedDiscount {
            discount_code: Some(DiscountCode {
                code: "SAVE1A2B3C4D".into(),
                discount_percent: 10.0,
                used: false,
            }),
        }));

        storefront.generate_discount_code().await;

        assert_eq!(
            storefront.notification_text(),
            "Discount code generated: SAVE1A2B3C4D"
        );
        assert_eq!(storefront.api().stats_calls(), 1);

        storefront.generate_discount_code().await;
        assert_eq!(storefront.notification_text(), "Discount code generated: N/A");
    }

    #[tokio::test]
    async fn generate_failure_surfaces_error() {
        let (storefront, _) = storefront();
        storefront
            .api()
            .push_generate(Err(rejected("Code limit reached")));
        storefront.generate_discount_code().await;
        assert_eq!(storefront.notification_text(), "Code limit reached");
        assert_eq!(storefront.api().stats_calls(), 0);

        storefront
            .api()
            .push_generate(Err(CommerceError::Malformed("eof".into())));
        storefront.generate_discount_code().await;
        assert_eq!(storefront.notification_text(), "Error generating discount code");
    }

    #[tokio::test]
    async fn notifications_expire_on_simulated_clock() {
        let (storefront, clock) = storefront();
        storefront.add_item_by_id(1).await;

        clock.advance(Duration::seconds(3));
        storefront.remove_item(1);
        assert_eq!(storefront.notification_text(), "Item removed from cart");

        clock.advance(Duration::seconds(3));
        assert_eq!(storefront.notification_text(), "Item removed from cart");

        clock.advance(Duration::seconds(2));
        assert_eq!(storefront.notification_text(), "");
        assert!(storefront.snapshot().notification.is_none());
    }

    #[tokio::test]
    async fn notification_ttl_can_be_shortened() {
        let clock = ManualClock::default();
        let storefront =
            Storefront::with_clock(FakeCommerce::default(), Catalog::demo(), clock.clone())
                .with_notification_ttl(Duration::seconds(1));

        storefront.remove_item(1);
        clock.advance(Duration::seconds(1));
        assert_eq!(storefront.notification_text(), "");
    }
}
