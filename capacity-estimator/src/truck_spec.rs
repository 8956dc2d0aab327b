//! Validated truck specification.
//!
//! Validation is presence-only: a key counts as present if it exists in the
//! object, whatever its value (including `null`). The object is kept verbatim
//! so the prompt sees exactly what the client sent.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::errors::{EstimatorError, EstimatorResult};

/// Required keys, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "manufacturer",
    "model",
    "type",
    "year",
    "startingRate",
    "units",
    "dimensions",
];

/// Client-supplied truck description. Always wraps a JSON object holding
/// every key in [`REQUIRED_FIELDS`].
#[derive(Debug, Clone, PartialEq)]
pub struct TruckSpec {
    raw: Value,
}

impl TruckSpec {
    /// Validates a request body.
    ///
    /// # Errors
    /// - [`EstimatorError::NotAnObject`] if `value` is not a JSON object
    /// - [`EstimatorError::MissingField`] naming the first absent required key
    pub fn from_value(value: Value) -> EstimatorResult<Self> {
        let Some(map) = value.as_object() else {
            return Err(EstimatorError::NotAnObject(json_kind(&value)));
        };
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !map.contains_key(**f)) {
            return Err(EstimatorError::MissingField(*missing));
        }
        Ok(Self { raw: value })
    }

    /// Pretty JSON rendering used inside the prompt.
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", self.raw)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.str_field("manufacturer")
    }

    pub fn model(&self) -> Option<&str> {
        self.str_field("model")
    }

    pub fn truck_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn year(&self) -> Option<i64> {
        self.raw.get("year").and_then(Value::as_i64)
    }

    pub fn starting_rate(&self) -> Option<f64> {
        self.raw.get("startingRate").and_then(Value::as_f64)
    }

    pub fn units(&self) -> Option<i64> {
        self.raw.get("units").and_then(Value::as_i64)
    }

    /// Parsed `dimensions`, if it is a well-formed `"L x W x H"` string.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.str_field("dimensions")?.parse().ok()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/* ---------------------------------------------------------------------------
Dimensions
--------------------------------------------------------------------------- */

/// Cargo space volume, in cubic meters, at or above which a truck counts as large.
pub const LARGE_TRUCK_MIN_M3: f64 = 20.0;
/// Cargo space volume, in cubic meters, at or above which a truck counts as medium.
pub const MEDIUM_TRUCK_MIN_M3: f64 = 10.0;

/// Cargo space in meters, parsed from `"L x W x H"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum DimensionsError {
    #[error("expected 3 values separated by 'x', got {0}")]
    Arity(usize),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("dimension must be positive and finite: {0:?}")]
    NonPositive(String),
}

impl Dimensions {
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_volume(self.volume_m3())
    }
}

impl FromStr for Dimensions {
    type Err = DimensionsError;

    /// Accepts `x`, `X` or `×` separators with optional whitespace and an
    /// optional trailing `m` on each value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(['x', 'X', '×']).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DimensionsError::Arity(parts.len()));
        }

        let mut values = [0.0_f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            let number = part.strip_suffix('m').unwrap_or(part).trim_end();
            let v: f64 = number
                .parse()
                .map_err(|_| DimensionsError::InvalidNumber(part.to_string()))?;
            if !v.is_finite() || v <= 0.0 {
                return Err(DimensionsError::NonPositive(part.to_string()));
            }
            *slot = v;
        }

        Ok(Self {
            length_m: values[0],
            width_m: values[1],
            height_m: values[2],
        })
    }
}

/// Coarse truck size used by the prompt's loading guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Under 10 m³: small furniture and boxes.
    Small,
    /// 10 to 20 m³: some appliances and furniture with boxes.
    Medium,
    /// 20 m³ and above: multiple large appliances and furniture.
    Large,
}

impl SizeClass {
    pub fn from_volume(volume_m3: f64) -> Self {
        if volume_m3 >= LARGE_TRUCK_MIN_M3 {
            SizeClass::Large
        } else if volume_m3 >= MEDIUM_TRUCK_MIN_M3 {
            SizeClass::Medium
        } else {
            SizeClass::Small
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "manufacturer": "Freightliner",
            "model": "Cascadia",
            "type": "Semi-Truck",
            "year": 2023,
            "startingRate": 150,
            "units": 30,
            "dimensions": "8.0 x 2.5 x 4.0"
        })
    }

    #[test]
    fn each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut body = full();
            body.as_object_mut().unwrap().remove(field);
            let err = TruckSpec::from_value(body).unwrap_err();
            assert_eq!(err.to_string(), format!("Missing required field: {field}"));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let body = json!({ "manufacturer": "Volvo", "year": 2020 });
        let err = TruckSpec::from_value(body).unwrap_err();
        assert!(matches!(err, EstimatorError::MissingField("model")));
    }

    #[test]
    fn null_counts_as_present() {
        let mut body = full();
        body["units"] = Value::Null;
        assert!(TruckSpec::from_value(body).is_ok());
    }

    #[test]
    fn non_object_is_rejected() {
        let err = TruckSpec::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, EstimatorError::NotAnObject("array")));
    }

    #[test]
    fn value_is_kept_verbatim() {
        let mut body = full();
        body["notes"] = json!("fragile");
        body["year"] = json!("2023");
        let spec = TruckSpec::from_value(body.clone()).unwrap();
        assert_eq!(spec.to_pretty_json(), format!("{body:#}"));
        assert_eq!(spec.year(), None);
    }

    #[test]
    fn accessors_expose_logged_fields() {
        let spec = TruckSpec::from_value(full()).unwrap();
        assert_eq!(spec.manufacturer(), Some("Freightliner"));
        assert_eq!(spec.model(), Some("Cascadia"));
        assert_eq!(spec.truck_type(), Some("Semi-Truck"));
        assert_eq!(spec.year(), Some(2023));
        assert_eq!(spec.starting_rate(), Some(150.0));
        assert_eq!(spec.units(), Some(30));
        assert_eq!(spec.dimensions().map(|d| d.size_class()), Some(SizeClass::Large));
    }

    #[test]
    fn pretty_json_keeps_key_order() {
        let spec = TruckSpec::from_value(full()).unwrap();
        let rendered = spec.to_pretty_json();
        let m = rendered.find("\"manufacturer\"").unwrap();
        let d = rendered.find("\"dimensions\"").unwrap();
        assert!(m < d);
    }

    #[test]
    fn dimensions_parse() {
        let d: Dimensions = "8.0 x 2.5 x 4.0".parse().unwrap();
        assert_eq!(d.volume_m3(), 80.0);
        assert_eq!(d.size_class(), SizeClass::Large);

        let d: Dimensions = "3X2×1.5m".parse().unwrap();
        assert_eq!(d.volume_m3(), 9.0);
        assert_eq!(d.size_class(), SizeClass::Small);

        let d: Dimensions = "4 m x 2.5 m x 1 m".parse().unwrap();
        assert_eq!(d.size_class(), SizeClass::Medium);
    }

    #[test]
    fn dimensions_reject_malformed() {
        assert_eq!(
            "8 x 2.5".parse::<Dimensions>(),
            Err(DimensionsError::Arity(2))
        );
        assert!(matches!(
            "8 x wide x 4".parse::<Dimensions>(),
            Err(DimensionsError::InvalidNumber(_))
        ));
        assert!(matches!(
            "8 x 0 x 4".parse::<Dimensions>(),
            Err(DimensionsError::NonPositive(_))
        ));
        assert!(matches!(
            "8 x -1 x 4".parse::<Dimensions>(),
            Err(DimensionsError::NonPositive(_))
        ));
    }

    #[test]
    fn size_class_boundaries() {
        assert_eq!(SizeClass::from_volume(9.99), SizeClass::Small);
        assert_eq!(SizeClass::from_volume(10.0), SizeClass::Medium);
        assert_eq!(SizeClass::from_volume(20.0), SizeClass::Large);
    }
}
