//! Request handling logic independent of the HTTP framework.

pub mod dashboard;
pub mod errors;
pub mod lead;

pub use errors::{ServiceError, ServiceResult};
