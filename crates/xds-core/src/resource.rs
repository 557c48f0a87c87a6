//! Resource capability trait.
//!
//! Every configuration message the cache stores implements [`Resource`]. The
//! trait supplies the three things the caches need from a resource kind: its
//! name, its validity, and its discriminator set (for kinds that have one).

use prost_types::Any;

use crate::{XdsError, XdsResult};

/// Trait for cacheable xDS resources.
///
/// Implementors provide the type URL and name extraction; validation and
/// `Any` encoding have default implementations that most kinds keep.
///
/// # Example
///
/// ```rust
/// use xds_core::{Resource, TypeUrl};
///
/// #[derive(Clone, PartialEq, prost::Message)]
/// struct VirtualHost {
///     #[prost(string, tag = "1")]
///     name: String,
///     #[prost(string, repeated, tag = "2")]
///     domains: Vec<String>,
/// }
///
/// impl Resource for VirtualHost {
///     const TYPE_URL: &'static str = TypeUrl::VIRTUAL_HOST;
///
///     fn name(&self) -> &str {
///         &self.name
///     }
///
///     fn discriminators(&self) -> Option<&[String]> {
///         Some(&self.domains)
///     }
/// }
///
/// let vh = VirtualHost { name: "alpha".into(), domains: vec!["".into()] };
/// assert!(!vh.is_valid());
/// ```
pub trait Resource: prost::Message + Clone + Default + 'static {
    /// Type URL of this resource kind.
    const TYPE_URL: &'static str;

    /// Get the resource name. This is the deduplication key.
    fn name(&self) -> &str;

    /// Discriminator set for kinds that have one (domains for virtual hosts).
    ///
    /// `None` means the kind carries no discriminators and only the name is
    /// checked by [`Resource::validate`].
    fn discriminators(&self) -> Option<&[String]> {
        None
    }

    /// Check the resource against its kind's validity rules.
    ///
    /// The default requires a non-empty name and, when discriminators apply,
    /// a non-empty set in which every entry is non-empty.
    fn validate(&self) -> XdsResult<()> {
        if self.name().is_empty() {
            return Err(self.invalid("resource name cannot be empty"));
        }
        if let Some(discriminators) = self.discriminators() {
            if discriminators.is_empty() {
                return Err(self.invalid("at least one domain is required"));
            }
            if discriminators.iter().any(String::is_empty) {
                return Err(self.invalid("domains cannot contain blank entries"));
            }
        }
        Ok(())
    }

    /// Returns true if [`Resource::validate`] accepts this resource.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build an [`XdsError::InvalidResource`] for this resource.
    fn invalid(&self, reason: &str) -> XdsError {
        XdsError::invalid_resource(Self::TYPE_URL, self.name(), reason)
    }

    /// Encode the resource to a protobuf `Any` message.
    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }

    /// Decode a resource from a protobuf `Any` message.
    ///
    /// Fails if the type URL does not match this kind or the payload does
    /// not decode.
    fn from_any(any: &Any) -> XdsResult<Self> {
        if any.type_url != Self::TYPE_URL {
            return Err(XdsError::InvalidTypeUrl {
                type_url: any.type_url.clone(),
                reason: format!("expected {}", Self::TYPE_URL),
            });
        }
        Self::decode(any.value.as_slice()).map_err(|e| XdsError::DecodingError {
            type_url: Self::TYPE_URL.to_string(),
            message: e.to_string(),
        })
    }
}
