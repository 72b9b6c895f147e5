mod authority;
mod state;
mod url_parser;

pub(crate) use authority::{
    encode_userinfo, parse_port_input, split_credentials, split_host_port, split_userinfo,
};
pub(crate) use state::State;
pub use url_parser::parse_url;

use crate::error::Result;
use crate::url::Url;

/// Options for parsing a URL, created with [`Url::options`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    base_url: Option<&'a Url>,
}

impl<'a> ParseOptions<'a> {
    /// Resolve relative input against `base`
    #[must_use]
    pub fn base_url(mut self, base: Option<&'a Url>) -> Self {
        self.base_url = base;
        self
    }

    /// Parse `input` with these options
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid URL, or is relative and
    /// cannot be resolved against the base URL.
    pub fn parse(self, input: &str) -> Result<Url> {
        parse_url(input, self.base_url)
    }
}
