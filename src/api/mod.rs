//! HTTP data access for the evaluation REST API.
//!
//! This module provides [`ApiClient`] and its per-resource operations
//! (users, periods, criteria, templates, evaluations, references and
//! dashboard), the response envelope handling, and the injectable auth token
//! sources.

mod client;
mod criteria;
mod dashboard;
mod evaluations;
mod periods;
mod references;
mod response;
mod templates;
mod token;
mod users;

pub use client::{ApiClient, REQUEST_ID_HEADER};
pub use evaluations::CreatedEvaluations;
pub use references::EvaluationFormContext;
pub use response::ApiEnvelope;
pub use token::{StaticToken, StorageToken, TokenProvider};
