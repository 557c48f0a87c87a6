//! # xds-core
//!
//! Core types, traits, and error handling for the xDS resource cache.
//!
//! This crate provides the foundational types used across the other crates:
//!
//! - [`XdsError`] - Error type for validation, decoding and configuration failures
//! - [`Resource`] - Capability trait every cacheable configuration message implements
//! - [`TypeUrl`] - Type URL handling and constants
//!
//! ## Example
//!
//! ```rust
//! use xds_core::TypeUrl;
//!
//! let vhost = TypeUrl::new(TypeUrl::VIRTUAL_HOST);
//! assert_eq!(vhost.short_name(), "VirtualHost");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod resource;
mod type_url;

pub use error::XdsError;
pub use resource::Resource;
pub use type_url::TypeUrl;

/// Result type alias using [`XdsError`].
pub type Result<T> = std::result::Result<T, XdsError>;

/// Alias for Result used throughout the cache crates.
pub type XdsResult<T> = Result<T>;
