//! Crewdesk Core - Shared types library.
//!
//! This crate provides common types used across Crewdesk components:
//! - `web` - The server-rendered front-end for the HR API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, the bearer credential,
//!   and the closed role/status enumerations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
