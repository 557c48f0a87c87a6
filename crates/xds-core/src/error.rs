//! Error types for cache operations.
//!
//! [`XdsError`] covers the few ways a cache interaction can fail: a resource
//! that does not satisfy its validation rules, an encoded resource that cannot
//! be decoded, and an invalid cache configuration.

/// Error type for the xDS resource cache.
///
/// The cache itself never surfaces validation failures from `add`; this type
/// is returned by the explicit variants (`Resource::validate`,
/// `SortedCollection::try_add`) so callers that care can find out why a
/// resource was dropped.
///
/// # Example
///
/// ```rust
/// use xds_core::XdsError;
///
/// fn validate_name(name: &str) -> Result<(), XdsError> {
///     if name.is_empty() {
///         return Err(XdsError::InvalidResource {
///             type_url: "type.googleapis.com/envoy.config.route.v3.VirtualHost".to_string(),
///             name: name.to_string(),
///             reason: "resource name cannot be empty".to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(validate_name("").is_err());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum XdsError {
    /// Malformed or unexpected type URL.
    #[error("invalid type URL: {type_url} - {reason}")]
    InvalidTypeUrl {
        /// The invalid type URL.
        type_url: String,
        /// Reason why the type URL is invalid.
        reason: String,
    },

    /// Resource validation failed.
    #[error("invalid resource {type_url}/{name}: {reason}")]
    InvalidResource {
        /// The type URL of the resource.
        type_url: String,
        /// The name of the resource.
        name: String,
        /// Reason for validation failure.
        reason: String,
    },

    /// Protobuf decoding failed.
    #[error("decoding error for {type_url}: {message}")]
    DecodingError {
        /// The type URL being decoded.
        type_url: String,
        /// Error message.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl XdsError {
    /// Create an [`XdsError::InvalidResource`].
    pub fn invalid_resource(
        type_url: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResource {
            type_url: type_url.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error reports a resource that failed validation.
    #[must_use]
    pub fn is_invalid_resource(&self) -> bool {
        matches!(self, Self::InvalidResource { .. })
    }
}
