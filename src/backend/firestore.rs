// SPDX-License-Identifier: MPL-2.0
//! Firestore REST document access.
//!
//! Documents travel as JSON objects whose fields wrap every scalar in a
//! typed envelope (`stringValue`, `integerValue`, ...). The [`Value`] struct
//! models that envelope loosely: every wrapper is optional, and accessors
//! pick out the expected representation. Note that `integerValue` arrives as
//! a *string* on the wire.

use crate::catalog::Product;
use crate::error::BackendError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Typed Firestore value envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_value: Option<ArrayValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArrayValue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

impl Value {
    /// Wraps a string for a document write.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Wraps a boolean for a document write.
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        Self {
            boolean_value: Some(value),
            ..Self::default()
        }
    }

    /// Wraps a timestamp for a document write.
    #[must_use]
    pub fn from_timestamp(value: DateTime<Utc>) -> Self {
        Self {
            timestamp_value: Some(value.to_rfc3339()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    /// Integer reading: accepts the wire string form and, for robustness
    /// against hand-edited documents, a double with no fractional part.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Some(raw) = &self.integer_value {
            return raw.parse().ok();
        }
        #[allow(clippy::cast_possible_truncation)]
        self.double_value
            .filter(|d| d.fract() == 0.0)
            .map(|d| d as i64)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.boolean_value
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_value
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Collects the string entries of an array value, skipping non-strings.
    #[must_use]
    pub fn as_string_array(&self) -> Vec<String> {
        self.array_value
            .as_ref()
            .map(|array| {
                array
                    .values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A Firestore document: resource name plus typed fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, Value>,
}

impl Document {
    /// Looks up a field, returning a default (empty) value when absent so
    /// accessor chains stay flat.
    #[must_use]
    pub fn field(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

fn map_request_error(err: reqwest::Error) -> BackendError {
    if let Some(status) = err.status() {
        BackendError::Status(status.as_u16())
    } else {
        BackendError::Network(err.to_string())
    }
}

/// Fetches a single document.
///
/// `bearer` carries the identity token for reads gated by security rules
/// (the admin role document); public reads pass `None`.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    bearer: Option<&str>,
) -> Result<Document, BackendError> {
    let mut request = client.get(url);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(map_request_error)?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound);
    }
    if !response.status().is_success() {
        return Err(BackendError::Status(response.status().as_u16()));
    }

    response
        .json::<Document>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

/// Creates or replaces a document with the given fields.
pub async fn patch_document(
    client: &reqwest::Client,
    url: &str,
    bearer: &str,
    fields: HashMap<String, Value>,
) -> Result<(), BackendError> {
    let body = Document {
        name: None,
        fields,
    };

    let response = client
        .patch(url)
        .bearer_auth(bearer)
        .json(&body)
        .send()
        .await
        .map_err(map_request_error)?;

    if !response.status().is_success() {
        return Err(BackendError::Status(response.status().as_u16()));
    }

    Ok(())
}

/// Fetches and decodes one product document.
pub async fn fetch_product(
    backend: &super::Backend,
    product_id: &str,
) -> Result<Product, BackendError> {
    let url = backend.document_url("products", product_id);
    let document = fetch_document(backend.client(), &url, None).await?;
    decode_product(product_id, &document)
}

/// Decodes a product document into the catalog model.
///
/// `name` and `price` are required; everything else degrades to its empty
/// form so a sparsely filled document still renders.
pub fn decode_product(product_id: &str, document: &Document) -> Result<Product, BackendError> {
    let name = document
        .field("name")
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BackendError::Decode("product is missing a name".to_string()))?;

    let price = document
        .field("price")
        .as_i64()
        .ok_or_else(|| BackendError::Decode("product is missing a price".to_string()))?;

    Ok(Product {
        id: product_id.to_string(),
        name,
        price,
        description: document
            .field("description")
            .as_str()
            .unwrap_or_default()
            .to_string(),
        images: document.field("images").as_string_array(),
        category: document.field("category").as_str().map(str::to_string),
        stock: document.field("stock").as_i64(),
        highlighted: document.field("highlighted").as_bool().unwrap_or(false),
        age_recommendation: document
            .field("ageRecommendation")
            .as_str()
            .map(str::to_string),
        dimensions: document.field("dimensions").as_str().map(str::to_string),
        updated_at: document.field("updatedAt").as_timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_document() -> Document {
        serde_json::from_value(serde_json::json!({
            "name": "projects/santis-toys/databases/(default)/documents/products/wooden-train",
            "fields": {
                "name": { "stringValue": "Tren de Madera" },
                "price": { "integerValue": "12990" },
                "description": { "stringValue": "Un tren **artesanal**." },
                "images": { "arrayValue": { "values": [
                    { "stringValue": "https://img.example/a.jpg" },
                    { "stringValue": "https://img.example/b.jpg" }
                ]}},
                "category": { "stringValue": "wooden-toys" },
                "stock": { "integerValue": "3" },
                "highlighted": { "booleanValue": true },
                "updatedAt": { "timestampValue": "2025-11-02T12:30:00Z" }
            }
        }))
        .expect("valid document json")
    }

    #[test]
    fn decode_product_reads_all_fields() {
        let product =
            decode_product("wooden-train", &product_document()).expect("decodes");

        assert_eq!(product.id, "wooden-train");
        assert_eq!(product.name, "Tren de Madera");
        assert_eq!(product.price, 12990);
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.category.as_deref(), Some("wooden-toys"));
        assert_eq!(product.stock, Some(3));
        assert!(product.highlighted);
        assert!(product.age_recommendation.is_none());
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn decode_product_requires_name() {
        let mut document = product_document();
        document.fields.remove("name");

        let err = decode_product("wooden-train", &document).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn decode_product_requires_price() {
        let mut document = product_document();
        document.fields.remove("price");

        let err = decode_product("wooden-train", &document).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn missing_optional_fields_degrade_to_empty() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "fields": {
                "name": { "stringValue": "Puzzle" },
                "price": { "integerValue": "4990" }
            }
        }))
        .expect("valid document json");

        let product = decode_product("puzzle", &document).expect("decodes");
        assert!(product.images.is_empty());
        assert!(product.description.is_empty());
        assert_eq!(product.stock, None);
        assert!(!product.highlighted);
    }

    #[test]
    fn integer_value_arrives_as_string_on_the_wire() {
        let value: Value =
            serde_json::from_value(serde_json::json!({ "integerValue": "42" })).unwrap();
        assert_eq!(value.as_i64(), Some(42));
    }

    #[test]
    fn whole_double_is_accepted_as_integer() {
        let value: Value =
            serde_json::from_value(serde_json::json!({ "doubleValue": 42.0 })).unwrap();
        assert_eq!(value.as_i64(), Some(42));
    }

    #[test]
    fn fractional_double_is_rejected_as_integer() {
        let value: Value =
            serde_json::from_value(serde_json::json!({ "doubleValue": 42.5 })).unwrap();
        assert_eq!(value.as_i64(), None);
    }

    #[test]
    fn string_array_skips_non_string_entries() {
        let value: Value = serde_json::from_value(serde_json::json!({
            "arrayValue": { "values": [
                { "stringValue": "keep" },
                { "booleanValue": true }
            ]}
        }))
        .unwrap();
        assert_eq!(value.as_string_array(), vec!["keep".to_string()]);
    }

    #[test]
    fn timestamp_round_trip() {
        let now = Utc::now();
        let value = Value::from_timestamp(now);
        let parsed = value.as_timestamp().expect("parses back");
        assert_eq!(parsed.timestamp(), now.timestamp());
    }
}
