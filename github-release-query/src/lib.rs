#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod matching;
pub mod params;
pub mod query;
pub mod runner;
pub mod service;

pub use client::{
    Asset, Authenticator, ClientError, OctocrabAuthenticator, OctocrabClient, Release,
    ReleaseClient, RepositoryHandle,
};
pub use matching::{match_assets, AssetMatch};
pub use params::{ParamsError, QueryParams};
pub use query::{
    Action, ActionKind, FailureReport, QueryError, QueryRequest, QueryResult, ReleaseSelector,
    Token,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use service::{execute, resolve_repository, ReleaseQueryService};
