//! Bridges multipart requests to typed records.
//!
//! A [`FormAdapter`] is built once per record type at startup. For each
//! request it reads every part whose name the record's schema declares,
//! applies declared defaults, decodes values by field kind and hands them to
//! the record's validating constructor.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use axum::extract::Multipart;
use tracing::debug;

use crate::domain::{FieldError, FieldValues, FormError, FormRecord, SchemaError, SharedSchema};

pub struct FormAdapter<T> {
    schema: SharedSchema,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for FormAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: FormRecord> FormAdapter<T> {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            schema: Arc::new(T::schema()?),
            _record: PhantomData,
        })
    }

    pub fn schema(&self) -> &SharedSchema {
        &self.schema
    }

    /// Read a multipart body and build a record from its parts.
    ///
    /// Parts without a name, or with a name the schema does not declare, are
    /// skipped unread. A repeated part replaces the earlier value.
    pub async fn extract(&self, mut multipart: Multipart) -> Result<T, FormError> {
        let mut parts: Vec<(String, String)> = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| FormError::Malformed {
            status: e.status(),
            reason: e.body_text(),
        })? {
            let Some(name) = field.name().map(str::to_string) else {
                debug!("Skipping unnamed multipart part");
                continue;
            };
            if !self.schema.declares(&name) {
                debug!("Skipping undeclared multipart part '{}'", name);
                continue;
            }
            let text = field.text().await.map_err(|e| FormError::Malformed {
                status: e.status(),
                reason: e.body_text(),
            })?;
            parts.push((name, text));
        }

        self.build(parts)
    }

    /// Build a record from `(name, text)` pairs.
    ///
    /// Every field error is collected before returning, in schema order.
    pub fn build<I, K, V>(&self, parts: I) -> Result<T, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut raw: HashMap<String, String> = HashMap::new();
        for (name, value) in parts {
            raw.insert(name.into(), value.into());
        }

        let mut values = FieldValues::default();
        let mut errors = Vec::new();

        for spec in self.schema.fields() {
            // An empty part counts as absent.
            let supplied = raw
                .get(spec.name)
                .map(String::as_str)
                .filter(|text| !text.is_empty());

            let Some(text) = supplied.or(spec.default) else {
                errors.push(FieldError::missing(spec.name));
                continue;
            };

            match spec.decode(text) {
                Ok(value) => values.insert(spec.name, value),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let record = T::from_fields(values)?;
        debug!(
            "Built {} from {} declared field(s)",
            std::any::type_name::<T>(),
            self.schema.fields().len()
        );
        Ok(record)
    }
}
