//! Pure data structures flowing through the fulfillment workflow.

pub mod customer;
pub mod order;
pub mod outcome;
pub mod receipts;
pub mod statistics;

pub use customer::*;
pub use order::*;
pub use outcome::*;
pub use receipts::*;
pub use statistics::*;
