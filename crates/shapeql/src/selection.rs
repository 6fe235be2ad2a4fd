//! Selection sets from shape descriptors.
//!
//! E.g., `struct { name: String, age: Option<i32> }` -> `"{name,age}"`.
//!
//! Fields are written in declaration order. Optional and list wrappers are
//! transparent, scalars and opaque records are leaves, and embedded records
//! splice their fields into the enclosing set.

use shapeql_core::{Queryable, Record, TypeRef};

use crate::{Error, Result};

/// Selection set for the shape of `T`.
pub fn serialize_selection_set<T: Queryable + ?Sized>() -> Result<String> {
    write_selection_set(&T::type_ref())
}

/// Selection set for a root shape.
///
/// The root must unwrap to a record that is not an opaque scalar.
pub fn write_selection_set(root: &TypeRef) -> Result<String> {
    let Some(record) = root.expandable_record() else {
        return Err(Error::NonRecordRoot(root.to_string()));
    };

    let mut writer = SelectionWriter::default();
    writer.write_block(record);
    Ok(writer.output)
}

#[derive(Default)]
struct SelectionWriter {
    output: String,
}

impl SelectionWriter {
    /// Write `{...}` for a record nested under a field name (or the root).
    fn write_block(&mut self, record: &Record) {
        self.output.push('{');
        let mut first = true;
        self.write_fields(record, &mut first);
        self.output.push('}');
    }

    /// Write the fields of `record` into the set currently open.
    ///
    /// `first` belongs to that set, so inlined records continue the parent's
    /// comma sequence.
    fn write_fields(&mut self, record: &Record, first: &mut bool) {
        for field in record.fields() {
            if field.is_inlined() {
                if let Some(inner) = field.ty().expandable_record() {
                    self.write_fields(inner, first);
                }
                continue;
            }

            if !*first {
                self.output.push(',');
            }
            *first = false;

            self.output.push_str(field.display_name());
            if let Some(inner) = field.ty().expandable_record() {
                self.write_block(inner);
            }
        }
    }
}
