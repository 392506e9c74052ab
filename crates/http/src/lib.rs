//! Travel ERP HTTP client
//!
//! A thin typed layer over the backend's JSON API. Authentication is an
//! HTTP-only session cookie owned by the browser (or the cookie store on
//! native targets); the client never sees a token.

pub mod client;
pub mod types;

pub use client::{ErpClient, ErpClientBuilder, error::ClientError};
pub use types::WriteAck;
