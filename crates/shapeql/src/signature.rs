//! Variable type signatures.
//!
//! Maps a type descriptor onto the GraphQL type grammar: `Int!`, `[ID!]`,
//! `Boolean`. A type is required (`!`) unless it sits directly under an
//! optional wrapper.

use shapeql_core::TypeRef;

use crate::{Config, Error, Result};

/// Signature for `ty` under the default config.
///
/// E.g., `Vec<i32>` with `required = true` -> `"[Int!]!"`.
pub fn serialize_type_signature(ty: &TypeRef, required: bool) -> Result<String> {
    let mut out = String::new();
    write_type_signature(&mut out, ty, required, &Config::default())?;
    Ok(out)
}

/// Write the minified signature of `ty` to `out`.
///
/// `required` says whether this level is a value (non-null) position.
pub fn write_type_signature(
    out: &mut String,
    ty: &TypeRef,
    required: bool,
    config: &Config,
) -> Result<()> {
    match ty {
        // Only the immediate wrapper matters: nested optionals stay nullable.
        TypeRef::Optional(inner) => return write_type_signature(out, inner, false, config),
        TypeRef::List(inner) => {
            out.push('[');
            write_type_signature(out, inner, true, config)?;
            out.push(']');
        }
        TypeRef::Text => out.push_str(config.text_scalar_name()),
        TypeRef::Scalar(name) if !name.is_empty() => out.push_str(name),
        TypeRef::Record(record) => match record.name() {
            Some(name) if !name.is_empty() => out.push_str(name),
            _ => return Err(Error::UnresolvableTypeName(ty.to_string())),
        },
        TypeRef::Scalar(_) => return Err(Error::UnresolvableTypeName(ty.to_string())),
    }

    if required {
        out.push('!');
    }
    Ok(())
}
