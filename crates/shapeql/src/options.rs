//! Operation options: name and directives.

use crate::{Error, Result};

/// Discriminant of [`OperationOption::Name`] in untyped form.
pub const OPERATION_NAME: &str = "operation_name";
/// Discriminant of [`OperationOption::Directive`] in untyped form.
pub const OPERATION_DIRECTIVE: &str = "operation_directive";

/// Option applied to a built operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationOption {
    /// Operation name. The last one supplied wins.
    Name(String),
    /// Operation directive text, e.g. `@cached(ttl: 60)`. Repeatable.
    Directive(String),
}

impl OperationOption {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn directive(text: impl Into<String>) -> Self {
        Self::Directive(text.into())
    }

    /// Untyped discriminant of this option.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => OPERATION_NAME,
            Self::Directive(_) => OPERATION_DIRECTIVE,
        }
    }
}

/// Option carried as a string discriminant and payload.
///
/// Options read from configuration or passed across a dynamic boundary arrive
/// in this form and are checked when converted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawOption {
    pub kind: String,
    pub value: String,
}

impl RawOption {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl From<OperationOption> for RawOption {
    fn from(option: OperationOption) -> Self {
        let kind = option.kind();
        match option {
            OperationOption::Name(value) | OperationOption::Directive(value) => {
                Self::new(kind, value)
            }
        }
    }
}

impl TryFrom<RawOption> for OperationOption {
    type Error = Error;

    fn try_from(raw: RawOption) -> Result<Self> {
        match raw.kind.as_str() {
            OPERATION_NAME => Ok(Self::Name(raw.value)),
            OPERATION_DIRECTIVE => Ok(Self::Directive(raw.value)),
            _ => Err(Error::InvalidOption(raw.kind)),
        }
    }
}

/// Options folded into the values the assembler needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationConfig {
    pub name: String,
    pub directives: Vec<String>,
}

impl OperationConfig {
    /// Fold typed options. Cannot fail.
    pub fn resolve<'a>(options: impl IntoIterator<Item = &'a OperationOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            config.apply(option.clone());
        }
        config
    }

    /// Fold untyped options, stopping at the first unknown discriminant.
    pub fn resolve_raw(options: impl IntoIterator<Item = RawOption>) -> Result<Self> {
        let mut config = Self::default();
        for raw in options {
            config.apply(OperationOption::try_from(raw)?);
        }
        Ok(config)
    }

    fn apply(&mut self, option: OperationOption) {
        match option {
            OperationOption::Name(name) => self.name = name,
            OperationOption::Directive(text) => self.directives.push(text),
        }
    }

    pub fn has_directives(&self) -> bool {
        !self.directives.is_empty()
    }

    /// Directives joined by spaces and padded on both sides, or empty.
    pub fn directives_text(&self) -> String {
        if self.directives.is_empty() {
            return String::new();
        }
        format!(" {} ", self.directives.join(" "))
    }
}
