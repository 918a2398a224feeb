//! Football championship simulator
//!
//! This crate provides:
//! - A round-robin driver that plays every pair of teams exactly once
//! - A standings table ranked by points
//! - Lookup of any played match in either team order
//! - An interactive console session for querying match results
//!
//! # Usage
//!
//! ```bash
//! # Play a championship with the built-in teams and query results
//! cargo run -p championship
//!
//! # Show per-match log output on stderr
//! RUST_LOG=debug cargo run -p championship
//! ```

mod config;
mod driver;
mod error;
mod results;
mod session;
mod standings;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use results::*;
pub use session::*;
pub use standings::*;
