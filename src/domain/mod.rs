//! Domain model and the pure pricing core.
//!
//! Nothing in here performs I/O. `discount` and `cost` hold the two functions
//! the rest of the crate is built around; `ports` describes the collaborators
//! that feed orders in and take receipts out.

pub mod catalog;
pub mod cost;
pub mod discount;
pub mod money;
pub mod order;
pub mod ports;
pub mod receipt;
