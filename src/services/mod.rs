//! Controllers and page services sitting between the routes and the backend.

use thiserror::Error;

use crate::client::errors::ClientError;
use crate::forms::FormError;

#[cfg(feature = "server")]
pub mod lead;
pub mod lead_form;
pub mod lead_list;
#[cfg(feature = "server")]
pub mod main;
pub mod submission;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
