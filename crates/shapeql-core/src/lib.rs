#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures describing the shape of a GraphQL selection.
//!
//! Two layers:
//! - **Descriptors**: `TypeRef`, `Record` and `Field`, plain values that
//!   describe what a Rust type looks like to the query compiler
//! - **Traits**: `Queryable` produces a descriptor for a type, `ScalarCodec`
//!   marks record types that decode themselves from a single scalar
//!
//! Descriptors are built fresh on every call and never mutated afterwards.

use std::borrow::Cow;
use std::fmt;

mod std_impls;
pub mod utils;

#[cfg(test)]
mod lib_tests;

// ============================================================================
// Descriptors
// ============================================================================

/// Type descriptor for a selection shape or a variable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    /// Plain text (`String`, `&str`).
    ///
    /// Kept apart from named scalars because variable signatures render it
    /// under a configurable name.
    Text,
    /// Named leaf type, e.g. `Int` or an enum.
    Scalar(Cow<'static, str>),
    /// Nullable wrapper.
    Optional(Box<TypeRef>),
    /// List wrapper.
    List(Box<TypeRef>),
    /// Record with named fields.
    Record(Record),
}

impl TypeRef {
    pub fn scalar(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Scalar(name.into())
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Strip every optional and list wrapper.
    ///
    /// Selection content does not depend on cardinality, so the selection
    /// compiler only ever looks at the innermost type.
    pub fn unwrap_wrappers(&self) -> &TypeRef {
        match self {
            Self::Optional(inner) | Self::List(inner) => inner.unwrap_wrappers(),
            other => other,
        }
    }

    /// The record a selection would expand into, if any.
    ///
    /// Returns `None` for scalars and for opaque records.
    pub fn expandable_record(&self) -> Option<&Record> {
        match self.unwrap_wrappers() {
            Self::Record(record) if !record.is_opaque() => Some(record),
            _ => None,
        }
    }
}

impl From<Record> for TypeRef {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// Human-readable rendering used in error messages.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Scalar(name) if name.is_empty() => f.write_str("<unnamed scalar>"),
            Self::Scalar(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Record(record) => match record.name() {
                Some(name) if record.is_opaque() => write!(f, "{name} (opaque)"),
                Some(name) => f.write_str(name),
                None => f.write_str("<anonymous record>"),
            },
        }
    }
}

/// Record with declaration-ordered fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    name: Option<Cow<'static, str>>,
    fields: Vec<Field>,
    opaque: bool,
}

impl Record {
    /// Create an anonymous record.
    ///
    /// Anonymous records can be selected from but have no variable signature.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Append a field. Declaration order is selection order.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Mark the record as an opaque scalar.
    ///
    /// Prefer [`ScalarCodec::scalar_type_ref`], which ties the marker to the
    /// trait.
    pub fn into_opaque(mut self) -> Self {
        self.opaque = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }
}

/// One field of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: Cow<'static, str>,
    rename: Option<Cow<'static, str>>,
    embedded: bool,
    ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<Cow<'static, str>>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            rename: None,
            embedded: false,
            ty,
        }
    }

    /// Field whose type is described by `T`.
    pub fn of<T: Queryable + ?Sized>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, T::type_ref())
    }

    /// Override the text emitted for this field.
    ///
    /// The override is written verbatim, so it may carry arguments or an
    /// alias, e.g. `user(login:$login)`.
    pub fn rename(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Promote this field's record fields into the parent selection set.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename_override(&self) -> Option<&str> {
        self.rename.as_deref()
    }

    /// Text emitted for the field: the override if present, else its name.
    pub fn display_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Whether the field splices its record's fields into the parent.
    ///
    /// Requires the embed marker, no name override, and a type that actually
    /// expands into a selection. An embed marker on a leaf is ignored.
    pub fn is_inlined(&self) -> bool {
        self.embedded && self.rename.is_none() && self.ty.expandable_record().is_some()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Types that describe their own GraphQL shape.
///
/// Implemented for std scalars and containers in this crate; user records get
/// it from `#[derive(Queryable)]`.
pub trait Queryable {
    fn type_ref() -> TypeRef;
}

/// Record types that decode themselves from a single scalar value.
///
/// Such types are leaves in a selection set: their fields are never expanded.
/// In a variable signature they appear under [`ScalarCodec::NAME`].
pub trait ScalarCodec {
    const NAME: &'static str;

    fn scalar_type_ref() -> TypeRef {
        TypeRef::Record(Record::named(Self::NAME).into_opaque())
    }
}
