//! Newtype IDs for Shopify resources.
//!
//! Shopify addresses every record with a global identifier of the form
//! `gid://shopify/<Resource>/<digits>`. The `define_id!` macro creates a
//! wrapper per resource type that holds only the numeric part and renders the
//! full global ID on demand, so product and metaobject IDs cannot be mixed up.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix shared by every Shopify global identifier.
pub const GID_PREFIX: &str = "gid://shopify/";

#[allow(clippy::unwrap_used)] // literal pattern, covered by tests
static TRAILING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)$").unwrap());

/// Errors that can occur when parsing a Shopify ID.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input does not end in a run of digits.
    #[error("no numeric ID at the end of \"{0}\"")]
    NoTrailingDigits(String),
    /// The trailing digits do not fit in a `u64`.
    #[error("numeric ID in \"{0}\" is out of range")]
    OutOfRange(String),
    /// The input is a global ID for a different resource type.
    #[error("expected a {expected} ID, got \"{input}\"")]
    WrongResource {
        /// Resource name the caller asked for.
        expected: &'static str,
        /// The rejected input.
        input: String,
    },
    /// The input is neither a number, a global ID, nor a catalog alias.
    #[error("unrecognised product reference \"{0}\"")]
    UnknownProduct(String),
}

/// Extract the numeric ID from the end of a composite identifier.
///
/// Works on global IDs (`gid://shopify/Metaobject/42`) as well as on any
/// other string that ends in ASCII digits.
///
/// # Errors
///
/// Returns [`IdError::NoTrailingDigits`] if the string does not end in a
/// digit and [`IdError::OutOfRange`] if the digits overflow a `u64`.
pub fn trailing_id(input: &str) -> Result<u64, IdError> {
    let digits = TRAILING_DIGITS
        .captures(input)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| IdError::NoTrailingDigits(input.to_owned()))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| IdError::OutOfRange(input.to_owned()))
}

/// Macro to define a type-safe Shopify ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `as_u64()` and `to_gid()`
/// - `FromStr` accepting plain digits or a global ID of the same resource
///
/// # Example
///
/// ```rust
/// # use descsync_core::define_id;
/// define_id!(CollectionId, "Collection");
///
/// let id: CollectionId = "gid://shopify/Collection/7".parse().unwrap();
/// assert_eq!(id.to_gid(), "gid://shopify/Collection/7");
/// assert!("gid://shopify/Product/7".parse::<CollectionId>().is_err());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $resource:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Shopify resource name used in the global ID.
            pub const RESOURCE: &'static str = $resource;

            /// Create a new ID from its numeric value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying numeric value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// Render the full global ID, e.g. `gid://shopify/Product/123`.
            #[must_use]
            pub fn to_gid(&self) -> String {
                format!("{}{}/{}", $crate::types::id::GID_PREFIX, $resource, self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Some(rest) = s.strip_prefix($crate::types::id::GID_PREFIX) {
                    let resource = rest.split('/').next().unwrap_or_default();
                    if resource != $resource {
                        return Err($crate::types::id::IdError::WrongResource {
                            expected: $resource,
                            input: s.to_owned(),
                        });
                    }
                    return $crate::types::id::trailing_id(s).map(Self);
                }
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    return s
                        .parse()
                        .map(Self)
                        .map_err(|_| $crate::types::id::IdError::OutOfRange(s.to_owned()));
                }
                Err($crate::types::id::IdError::NoTrailingDigits(s.to_owned()))
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId, "Product");
define_id!(MetaobjectId, "Metaobject");
define_id!(AppId, "App");
