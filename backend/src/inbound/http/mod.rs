//! HTTP inbound adapter exposing REST endpoints.

pub mod archive;
pub mod assignments;
mod assignments_dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use assignments_dto::AssignmentEnvelope;
pub use error::ApiResult;
