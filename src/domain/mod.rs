//! Domain entities exchanged with the lead backend.

pub mod filter;
pub mod lead;
