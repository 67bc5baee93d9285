//! Disaster news aggregation.
//!
//! Feeds are fetched and parsed ([`sources`]), their entries are matched
//! against a keyword [`classifier`], and the linked articles of the matching
//! entries are downloaded and extracted ([`extract`]). [`services::Pipeline`]
//! runs the three stages in order; a failing feed or article never aborts
//! the batch.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod http;
pub mod logging;
pub mod services;
pub mod sources;

#[cfg(test)]
mod test_support;
