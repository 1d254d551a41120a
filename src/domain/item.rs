use serde::Serialize;

use super::{FieldKind, FieldSpec, FieldValues, FormError, FormRecord, IntMap, RecordSchema, SchemaError};

/// Record accepted by `POST /test`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub token: String,
    pub opts: IntMap,
}

impl FormRecord for Item {
    fn schema() -> Result<RecordSchema, SchemaError> {
        RecordSchema::new(vec![
            FieldSpec::required("token", FieldKind::Text),
            FieldSpec::optional("opts", FieldKind::JsonIntMap, "{}"),
        ])
    }

    fn from_fields(mut fields: FieldValues) -> Result<Self, FormError> {
        Ok(Self {
            token: fields.take_text("token")?,
            opts: fields.take_int_map("opts")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    #[test]
    fn test_item_schema_is_valid() {
        let schema = Item::schema().unwrap();
        assert!(schema.field("token").unwrap().is_required());
        assert_eq!(schema.field("opts").unwrap().default, Some("{}"));
    }

    #[test]
    fn test_item_serializes_opts_as_object() {
        let mut fields = FieldValues::default();
        fields.insert("token", FieldValue::Text("vivalldi".to_string()));
        fields.insert("opts", FieldValue::IntMap(IntMap::from([("a".to_string(), 2)])));

        let item = Item::from_fields(fields).unwrap();
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"token": "vivalldi", "opts": {"a": 2}})
        );
    }
}
