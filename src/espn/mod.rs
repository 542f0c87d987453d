//! ESPN Fantasy Football v3 API client.
//!
//! Split into:
//! - `http`: endpoint URLs, cookie auth, raw league fetches
//! - `types`: serde models for the league JSON, including the heterogeneous
//!   owner and team-reference shapes older seasons use
//! - `client`: a per-(league, year) season handle

pub mod client;
pub mod http;
pub mod types;

pub use client::SeasonClient;
pub use http::{Credentials, EspnApi, FFL_BASE_URL};
