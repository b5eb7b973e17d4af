//! Client for the remote supplier matching service.

pub mod client;
pub mod error;

pub use client::MatchingClient;
pub use error::MatchingError;
