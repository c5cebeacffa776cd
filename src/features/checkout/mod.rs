//! Checkout module - the concrete page the terminal UI hosts
//!
//! Six screens of tagged elements built from an `Order`, plus the language
//! bar and the optional theme toggle icons.

pub mod page;

// Re-export commonly used types
pub use page::{CheckoutPage, Order, Screen, ScreenKind};
