//! Declarative record schemas and decoded field values

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde_json::Value;

use super::error::{FieldError, FormError, SchemaError};

/// Mapping carried by JSON-encoded integer map fields, in wire order
pub type IntMap = IndexMap<String, i64>;

/// Declared type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text, taken verbatim
    Text,
    /// JSON text encoding an object of string keys to integer values
    JsonIntMap,
}

/// A single field declaration
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Default in wire form; `None` makes the field required
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Decode a raw part value under this field's kind
    pub fn decode(&self, raw: &str) -> Result<FieldValue, FieldError> {
        match self.kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::JsonIntMap => {
                serde_json::from_str::<Value>(raw)
                    .map_err(|e| FieldError::invalid_json(self.name, e))?;
                // Re-read from text so key order survives.
                let map: IntMap = serde_json::from_str(raw)
                    .map_err(|e| FieldError::schema_violation(self.name, e))?;
                Ok(FieldValue::IntMap(map))
            }
        }
    }
}

/// Ordered set of field declarations with unique names
#[derive(Debug, Clone)]
pub struct RecordSchema {
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Build a schema, rejecting duplicate names and defaults that do not decode.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField(field.name.to_string()));
            }
            if let Some(default) = field.default {
                field
                    .decode(default)
                    .map_err(|source| SchemaError::InvalidDefault {
                        field: field.name.to_string(),
                        source,
                    })?;
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// A decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    IntMap(IntMap),
}

/// Decoded values for every field of a schema, keyed by field name
#[derive(Debug, Default)]
pub struct FieldValues {
    values: HashMap<String, FieldValue>,
}

impl FieldValues {
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn take_text(&mut self, name: &str) -> Result<String, FormError> {
        match self.values.remove(name) {
            Some(FieldValue::Text(text)) => Ok(text),
            _ => Err(FormError::Undeclared(name.to_string())),
        }
    }

    pub fn take_int_map(&mut self, name: &str) -> Result<IntMap, FormError> {
        match self.values.remove(name) {
            Some(FieldValue::IntMap(map)) => Ok(map),
            _ => Err(FormError::Undeclared(name.to_string())),
        }
    }
}
