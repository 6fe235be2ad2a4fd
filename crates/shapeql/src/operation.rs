//! Operation text assembly.

use std::fmt;

use crate::options::OperationConfig;

/// Root operation type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Join precompiled pieces into operation text.
///
/// `variable_block` is the parenthesized declaration block, or empty.
///
/// Anonymous operations without directives keep a space after `query` but
/// none after `mutation`/`subscription`: `query {...}`, `mutation{...}`.
pub fn assemble(
    kind: OperationKind,
    config: &OperationConfig,
    variable_block: &str,
    selection: &str,
) -> String {
    let keyword = kind.keyword();
    let directives = config.directives_text();

    if !variable_block.is_empty() {
        return format!("{keyword} {}{variable_block}{directives}{selection}", config.name);
    }

    if config.name.is_empty() && !config.has_directives() {
        return match kind {
            OperationKind::Query => format!("{keyword} {selection}"),
            OperationKind::Mutation | OperationKind::Subscription => {
                format!("{keyword}{selection}")
            }
        };
    }

    format!("{keyword} {}{directives}{selection}", config.name)
}
