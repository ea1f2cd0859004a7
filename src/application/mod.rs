//! Application layer orchestrating a checkout.
//!
//! This module defines `Checkout`, which connects an order source, the pure
//! pricing core and a receipt sink, and logs what happened along the way.

pub mod checkout;
