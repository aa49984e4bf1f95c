//! Interactive terminal storefront
//!
//! Reads one command per line, forwards it to the [`Storefront`] and prints
//! the re-rendered session. Generic over the reader and writer so it can be
//! driven from tests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::clock::Clock;
use crate::commerce::CommerceApi;
use crate::session::{CheckoutOutcome, Storefront};
use crate::view::{render_admin_panel, render_catalog, render_cart, render_session};

pub const HELP: &str = "\
Commands:
  products              list the catalog
  add <id>              add one unit of a product
  inc <id> | dec <id>   change a cart line by one
  qty <id> <n>          set a cart line quantity (0 removes)
  remove <id>           remove a cart line
  cart                  show the cart
  checkout [code]       place the order, optionally with a discount code
  stats                 refresh and show admin statistics
  discount              generate a new discount code
  help                  show this help
  quit                  leave the storefront
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Add(u32),
    Increment(u32),
    Decrement(u32),
    Quantity(u32, i64),
    Remove(u32),
    Cart,
    Checkout(String),
    Stats,
    Discount,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let id = |arg: Option<&str>| -> Result<u32, String> {
            let arg = arg.ok_or_else(|| format!("'{verb}' needs a product id"))?;
            arg.parse()
                .map_err(|_| format!("'{arg}' is not a valid product id"))
        };

        let command = match verb.to_lowercase().as_str() {
            "products" | "ls" => Self::Products,
            "add" => Self::Add(id(words.next())?),
            "inc" | "+" => Self::Increment(id(words.next())?),
            "dec" | "-" => Self::Decrement(id(words.next())?),
            "qty" => {
                let product_id = id(words.next())?;
                let raw = words.next().ok_or("'qty' needs a quantity")?;
                let quantity = raw
                    .parse()
                    .map_err(|_| format!("'{raw}' is not a valid quantity"))?;
                Self::Quantity(product_id, quantity)
            }
            "remove" | "rm" => Self::Remove(id(words.next())?),
            "cart" => Self::Cart,
            // The rest of the line is the code; the storefront trims it.
            "checkout" => Self::Checkout(
                line.trim_start()
                    .get(verb.len()..)
                    .unwrap_or_default()
                    .to_string(),
            ),
            "stats" | "refresh" => Self::Stats,
            "discount" => Self::Discount,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
        };
        Ok(Some(command))
    }
}

/// Runs the shell until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run<C, K, R, W>(
    storefront: &Storefront<C, K>,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    C: CommerceApi,
    K: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    storefront.open().await;
    output
        .write_all(render_catalog(storefront.catalog()).as_bytes())
        .await?;
    output.write_all(HELP.as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                output.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };
        debug!(?command, "Shell command");

        let rendered = match command {
            Command::Quit => break,
            Command::Help => HELP.to_string(),
            Command::Products => render_catalog(storefront.catalog()),
            Command::Cart => render_cart(&storefront.snapshot()),
            Command::Add(id) => {
                if storefront.add_item_by_id(id).await {
                    render_session(&storefront.snapshot())
                } else {
                    format!("No product with id {id}\n")
                }
            }
            Command::Increment(id) => {
                storefront.increment(id);
                render_session(&storefront.snapshot())
            }
            Command::Decrement(id) => {
                storefront.decrement(id);
                render_session(&storefront.snapshot())
            }
            Command::Quantity(id, quantity) => {
                storefront.set_quantity(id, quantity);
                render_session(&storefront.snapshot())
            }
            Command::Remove(id) => {
                storefront.remove_item(id);
                render_session(&storefront.snapshot())
            }
            Command::Checkout(code) => {
                let outcome = storefront.checkout(&code).await;
                let mut out = String::new();
                if outcome == CheckoutOutcome::AlreadyInProgress {
                    out.push_str("A checkout is already in progress\n");
                }
                if let Some(inline) = outcome.inline_message() {
                    out.push_str(&format!("Discount: {inline}\n"));
                }
                out.push_str(&render_session(&storefront.snapshot()));
                out
            }
            Command::Stats => {
                storefront.refresh_stats().await;
                render_admin_panel(storefront.stats().as_ref())
            }
            Command::Discount => {
                storefront.generate_discount_code().await;
                render_session(&storefront.snapshot())
            }
        };
        output.write_all(rendered.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}
