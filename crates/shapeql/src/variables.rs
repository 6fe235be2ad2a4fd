//! Operation variables.
//!
//! Each variable keeps its type descriptor, for the declaration block, and its
//! JSON value, for the request body. Both are emitted in lexicographic name
//! order so identical inputs give identical output regardless of insertion
//! order.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use shapeql_core::{Queryable, TypeRef};

use crate::signature::write_type_signature;
use crate::{Config, Error, Result};

/// A single declared variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    ty: TypeRef,
    value: serde_json::Value,
}

impl Variable {
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

/// Variable name -> typed value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    entries: IndexMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with the type and value of `value`.
    ///
    /// Re-declaring a name replaces the earlier entry.
    pub fn insert<T>(&mut self, name: impl Into<String>, value: &T) -> Result<()>
    where
        T: Queryable + Serialize + ?Sized,
    {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|e| Error::VariableEncoding {
            name: name.clone(),
            message: e.to_string(),
        })?;
        self.insert_typed(name, T::type_ref(), value);
        Ok(())
    }

    /// Declare `name` with an explicit type.
    ///
    /// For values whose Rust type does not describe the server-side type,
    /// e.g. an enum sent as a plain string.
    pub fn insert_typed(&mut self, name: impl Into<String>, ty: TypeRef, value: serde_json::Value) {
        self.entries.insert(name.into(), Variable { ty, value });
    }

    /// Builder form of [`Variables::insert`].
    pub fn with<T>(mut self, name: impl Into<String>, value: &T) -> Result<Self>
    where
        T: Queryable + Serialize + ?Sized,
    {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name.
    pub fn sorted(&self) -> Vec<(&str, &Variable)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(name, var)| (name.as_str(), var))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Serializes the values only, as the `variables` object of a request.
impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, var) in self.sorted() {
            map.serialize_entry(name, &var.value)?;
        }
        map.end()
    }
}

/// Declaration block for `variables` under the default config.
///
/// E.g., `{"a": 123i32, "b": Some(true)}` -> `"($a:Int!$b:Boolean)"`.
/// An empty map gives an empty string.
pub fn serialize_variable_block(variables: &Variables) -> Result<String> {
    let mut out = String::new();
    write_variable_block(&mut out, variables, &Config::default())?;
    Ok(out)
}

/// Write the minified declaration block for `variables` to `out`.
pub fn write_variable_block(out: &mut String, variables: &Variables, config: &Config) -> Result<()> {
    if variables.is_empty() {
        return Ok(());
    }

    out.push('(');
    for (name, var) in variables.sorted() {
        out.push('$');
        out.push_str(name);
        out.push(':');
        write_type_signature(out, &var.ty, true, config)?;
        // No comma: commas are insignificant in GraphQL and output stays minified.
    }
    out.push(')');
    Ok(())
}
