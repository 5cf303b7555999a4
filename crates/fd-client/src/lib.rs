//! fd-client library
//!
//! Typed HTTP client for the FibroDetect REST backend.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ClientError, ClientResult, Client, ImageUpload, LoginResponse};
