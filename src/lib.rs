#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Allocation types shared by std and no_std builds
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod parser;
mod path;
mod relative;
mod scheme;
mod serializer;
mod setters;
mod types;
mod unicode;
mod url;
mod url_base;
#[doc(hidden)]
pub use url_base::UrlBase;
mod url_components;

// Handle-based access, for foreign-function shims
pub mod handle;

/// Percent-encoding with the URL encode sets
pub mod percent_encode {
    pub use crate::unicode::percent_encode::{
        EncodeSet, percent_decode, percent_decode_lossy, percent_encode, percent_encode_cow,
    };
}

// Public API
pub use error::{HostError, ParseError, SetError};
pub use host::Host;
pub use parser::ParseOptions;
pub use path::UrlPath;
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
