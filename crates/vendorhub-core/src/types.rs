//! Search form and supplier match types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three form fields sent to the matching service.
///
/// All fields are free text. Quantity is not parsed and location is not
/// geocoded; the service receives exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub product: String,
    pub quantity: String,
    pub location: String,
}

impl SearchRequest {
    #[must_use]
    pub fn new(
        product: impl Into<String>,
        quantity: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            quantity: quantity.into(),
            location: location.into(),
        }
    }

    /// `true` when every field is a non-empty string. Whitespace counts as content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.product.is_empty() && !self.quantity.is_empty() && !self.location.is_empty()
    }

    /// Fields that still block submission, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Product => &self.product,
            Field::Quantity => &self.quantity,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Product => &mut self.product,
            Field::Quantity => &mut self.quantity,
            Field::Location => &mut self.location,
        };
        *slot = value.into();
    }
}

/// Names a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Product,
    Quantity,
    Location,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Product, Field::Quantity, Field::Location];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Product => "product",
            Field::Quantity => "quantity",
            Field::Location => "location",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field \"{0}\" (expected product, quantity or location)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(Field::Product),
            "quantity" => Ok(Field::Quantity),
            "location" => Ok(Field::Location),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// One supplier returned by the matching service.
///
/// The service owns this shape and nothing is validated locally. Each field
/// is optional because a record missing it is still rendered, just without
/// that value. `score` is kept verbatim, including values outside `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl SupplierMatch {
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>, score: f64) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location.into()),
            score: Some(score),
        }
    }

    /// Reads a record leniently: a field with the wrong JSON type is treated
    /// as absent instead of failing the whole response.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        };
        Self {
            name: text("name"),
            location: text("location"),
            score: value.get("score").and_then(serde_json::Value::as_f64),
        }
    }
}
