//! shapeql: compile Rust types into minified GraphQL operations.
//!
//! A type describes the fields a caller wants back; the compiler turns it into
//! a selection set and wraps it in a query, mutation or subscription:
//!
//! ```
//! use shapeql::{OperationOption, Queryable, Variables};
//!
//! #[derive(Queryable)]
//! struct Person {
//!     name: String,
//!     age: Option<i32>,
//! }
//!
//! let variables = Variables::new().with("id", "abc").unwrap();
//! let options = [OperationOption::name("GetThing")];
//! let text = shapeql::build_query::<Person>(&variables, &options).unwrap();
//! assert_eq!(text, "query GetThing($id:ID!){name,age}");
//! ```
//!
//! Pieces, leaf-first:
//! - `signature` - variable type signatures (`[Int!]`)
//! - `variables` - the variable map and its declaration block
//! - `selection` - selection sets from shape descriptors
//! - `options` - operation name and directives
//! - `operation` - final text assembly
//! - `builder` - configured entry points
//! - `request` - the body handed to a transport

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Lets `#[derive(Queryable)]` resolve `::shapeql` paths inside this crate.
extern crate self as shapeql;

pub mod builder;
pub mod config;
pub mod operation;
pub mod options;
pub mod request;
pub mod selection;
pub mod signature;
pub mod variables;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod request_tests;

pub use builder::{OperationBuilder, build_mutation, build_query, build_subscription};
pub use config::Config;
pub use operation::OperationKind;
pub use options::{OperationConfig, OperationOption, RawOption};
pub use request::Request;
pub use selection::{serialize_selection_set, write_selection_set};
pub use signature::{serialize_type_signature, write_type_signature};
pub use variables::{Variables, serialize_variable_block};

pub use shapeql_core::{Field, Queryable, Record, ScalarCodec, TypeRef, utils};
pub use shapeql_macros::Queryable;

/// Errors that can occur while building operation text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Untyped option with a discriminant that is neither a name nor a directive.
    #[error("invalid query option type: {0}")]
    InvalidOption(String),

    /// A variable type with no name to put in its signature.
    #[error("type {0} has no resolvable name")]
    UnresolvableTypeName(String),

    /// Root shape that does not unwrap to an expandable record.
    #[error("root shape must be a record, found {0}")]
    NonRecordRoot(String),

    /// Variable value that could not be encoded as JSON.
    #[error("failed to encode variable `{name}`: {message}")]
    VariableEncoding { name: String, message: String },
}

/// Result type for operation building.
pub type Result<T> = std::result::Result<T, Error>;
