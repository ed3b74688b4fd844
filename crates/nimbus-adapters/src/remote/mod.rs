//! `RemoteLookup` adapters.
//!
//! - [`HttpRemoteLookup`]: the real thing, against the platform API and the
//!   GitHub releases API.
//! - [`StaticRemoteLookup`]: in-memory fixtures for tests and offline use.

pub mod http;
pub mod memory;

pub use http::HttpRemoteLookup;
pub use memory::StaticRemoteLookup;
