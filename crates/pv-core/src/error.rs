//! # AppError
//!
//! Centralized error handling for the Postview ecosystem.
//!
//! There is exactly one category: network failures and undecodable response
//! bodies are collapsed together, because callers only ever log them — no
//! error reaches the rendered surface.

use thiserror::Error;

/// The primary error type for post-source operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// The fetch did not produce a decodable batch of posts, for any reason.
    #[error("fetch or decode failure: {0}")]
    FetchOrDecode(String),
}

/// A specialized Result type for Postview logic.
pub type Result<T> = std::result::Result<T, AppError>;
