//! Form definitions backing the lead routes.

use thiserror::Error;

use crate::forms::lead::LeadFormErrors;

pub mod lead;
pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("row {row}: {errors}")]
    InvalidRow { row: usize, errors: LeadFormErrors },

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("the file contains no leads")]
    EmptyUpload,
}
