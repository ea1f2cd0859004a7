//! Input and output collaborators around the pricing core.

pub mod csv;
pub mod prompt;
pub mod receipt_writer;
