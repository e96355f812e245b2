//! Shopping cart module.
//!
//! Contains the cart state machine, its store, and the checkout summary.

mod line_item;
mod quantity;
mod state;
mod store;
mod summary;

pub use line_item::{clamp_quantity, LineItem, LineKey, MAX_QUANTITY, MIN_QUANTITY};
pub use quantity::parse_quantity;
pub use state::{CartCommand, CartState};
pub use store::CartStore;
pub use summary::{CheckoutSummary, SummaryLine};
