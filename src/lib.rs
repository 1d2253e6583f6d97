//! # Vidsum
//!
//! A CLI client for YouTube video summarisation over HTTP.
//!
//! ## Features
//!
//! - **Validated input**: YouTube watch, short-link, and embed URLs are
//!   checked structurally before any network call
//! - **Single-flight submissions**: one request lifecycle at a time,
//!   tracked by a small state machine
//! - **Backend agnostic**: any service exposing the `/chat` contract works

pub mod client;
pub mod config;
pub mod submission;
pub mod summary;
pub mod validate;

pub use client::{ClientError, Summarize, SummarizeClient};
pub use config::Config;
pub use submission::{RequestState, Submission};
pub use summary::SummaryResult;
