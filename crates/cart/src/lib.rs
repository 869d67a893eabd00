//! Shopping cart (event-driven aggregate).
//!
//! Mutations are commands handled into cart events and then applied, so the
//! caller always learns exactly what changed. No IO, no presentation.

pub mod cart;

pub use cart::{
    Cart, CartCommand, CartEvent, CartLine, Cleared, LineAdded, LineRemoved, QuantityChanged,
};
