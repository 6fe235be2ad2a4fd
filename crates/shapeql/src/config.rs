//! Configuration for operation building.

use std::borrow::Cow;

/// Name the plain text scalar takes in variable signatures.
pub const DEFAULT_TEXT_SCALAR: &str = "ID";

/// Configuration for operation building.
#[derive(Clone, Debug)]
pub struct Config {
    /// Signature name for `String`-like variables
    pub(crate) text_scalar: Cow<'static, str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_scalar: Cow::Borrowed(DEFAULT_TEXT_SCALAR),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signature name used for plain text variables.
    ///
    /// Defaults to `ID`. Servers that declare text arguments as `String`
    /// need `text_scalar("String")`.
    pub fn text_scalar(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.text_scalar = name.into();
        self
    }

    pub fn text_scalar_name(&self) -> &str {
        &self.text_scalar
    }
}
