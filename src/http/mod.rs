//! Shared HTTP plumbing for Graph API calls.

mod client;
mod params;

pub use client::HttpClient;
pub use params::{Params, join_list};
