//! DTO modules that bridge services with templates.

pub mod lead;
pub mod main;
