//! Query model: requests, actions, results and errors.

mod action;
mod error;
mod request;
mod result;
mod token;

pub use action::{Action, ActionKind, ReleaseSelector, LATEST};
pub use error::QueryError;
pub use request::QueryRequest;
pub use result::{FailureReport, QueryResult};
pub use token::Token;
