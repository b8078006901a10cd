//! Sentiment scoring service: free text in, a 1-10 score and label out.
//!
//! The [`scoring`] module holds the pure scoring function, [`analyzer`] the
//! injectable polarity analyzer and its built-in lexicon implementation, and
//! [`server`] the HTTP surface built on axum.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod scoring;
pub mod server;
