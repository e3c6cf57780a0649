//! Read-only views over the two JSON input documents.
//!
//! Neither document is deserialized into a fixed schema. The views only
//! look up the handful of fields the converter consumes, and a field that
//! holds something other than the expected JSON type is treated exactly
//! like a missing field. Addresses are the exception: any JSON value is a
//! valid address.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CoreError;

/// Reads `path` and parses its whole contents as one JSON value.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, CoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CoreError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CoreError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// The source-file table: file-id to per-file record.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument(Value);

impl MetadataDocument {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// Yields `(file_id, realpath)` for every entry of the `files` table.
    pub fn files(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .get("files")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|files| files.iter())
            .map(|(id, entry)| (id.as_str(), str_field(entry, "realpath")))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// The design hierarchy: an ordered list of modules.
#[derive(Debug, Clone, PartialEq)]
pub struct NetlistDocument(Value);

impl NetlistDocument {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether the document carries a `modulesp` array at all.
    pub fn has_module_list(&self) -> bool {
        self.0.get("modulesp").is_some_and(Value::is_array)
    }

    pub fn modules(&self) -> impl Iterator<Item = Module<'_>> {
        array_field(&self.0, "modulesp")
            .iter()
            .map(|node| Module { node })
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Module<'doc> {
    node: &'doc Value,
}

impl<'doc> Module<'doc> {
    pub fn name(&self) -> Option<&'doc str> {
        str_field(self.node, "name")
    }

    /// Opaque identifier other modules use to refer to this one.
    pub fn addr(&self) -> Option<Address<'doc>> {
        self.node.get("addr").map(Address::from_value)
    }

    /// Packed source location, e.g. `a,12:3,18:9`.
    pub fn loc(&self) -> Option<&'doc str> {
        str_field(self.node, "loc")
    }

    pub fn statements(&self) -> impl Iterator<Item = Statement<'doc>> + 'doc {
        array_field(self.node, "stmtsp")
            .iter()
            .map(|node| Statement { node })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Statement<'doc> {
    node: &'doc Value,
}

impl<'doc> Statement<'doc> {
    /// The statement tag (`type` field).
    pub fn kind(&self) -> Option<&'doc str> {
        str_field(self.node, "type")
    }

    pub fn is_cell(&self) -> bool {
        self.kind() == Some("CELL")
    }

    /// Instance name of a cell.
    pub fn name(&self) -> Option<&'doc str> {
        str_field(self.node, "name")
    }

    /// Address of the module a cell instantiates (`modp` field).
    pub fn module_ref(&self) -> Option<Address<'doc>> {
        self.node.get("modp").map(Address::from_value)
    }
}

/// A module address, compared by JSON value.
///
/// Strings are kept as-is; every other value is held as its JSON text, so
/// `1` and `"1"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address<'doc> {
    Text(&'doc str),
    Json(String),
}

impl<'doc> Address<'doc> {
    pub fn from_value(value: &'doc Value) -> Self {
        match value {
            Value::String(text) => Address::Text(text),
            other => Address::Json(other.to_string()),
        }
    }
}

impl fmt::Display for Address<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Text(text) => f.write_str(text),
            Address::Json(json) => f.write_str(json),
        }
    }
}

fn str_field<'doc>(node: &'doc Value, key: &str) -> Option<&'doc str> {
    node.get(key).and_then(Value::as_str)
}

fn array_field<'doc>(node: &'doc Value, key: &str) -> &'doc [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
