pub mod config;
pub mod error;
pub mod validate;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use validate::{has_error, message_for, FieldError};
