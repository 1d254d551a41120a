use std::sync::Arc;

pub mod error;
pub mod item;
pub mod schema;

pub use error::{FieldError, FormError, SchemaError};
pub use item::Item;
pub use schema::{FieldKind, FieldSpec, FieldValue, FieldValues, IntMap, RecordSchema};

/// A record that can be built from named form fields.
///
/// Implementors declare their fields once through [`FormRecord::schema`] and
/// receive decoded values, with defaults already applied, in
/// [`FormRecord::from_fields`].
pub trait FormRecord: Sized + Send + 'static {
    /// Field declarations, in the order errors are reported
    fn schema() -> Result<RecordSchema, SchemaError>;

    /// Validating constructor
    fn from_fields(fields: FieldValues) -> Result<Self, FormError>;
}

/// Shared, immutable schema handle
pub type SharedSchema = Arc<RecordSchema>;
