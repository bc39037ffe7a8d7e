use serde::{Deserialize, Deserializer, Serialize};

use crate::core::AxisKind;

/// One race-entry observation as delivered by `/api/pcp-data`.
///
/// Every attribute is optional: absent keys, `null`, non-integral numbers
/// for integer attributes and non-string values for text attributes all read
/// back as `None` ("undefined").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub grid: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub laps: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub circuit_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub reason_retired: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub constructor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tyre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

/// Record attribute addressable by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Year,
    Grid,
    Laps,
    CircuitType,
    ReasonRetired,
    Constructor,
    Engine,
    Tyre,
    Country,
    Status,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Year,
        Field::Grid,
        Field::Laps,
        Field::CircuitType,
        Field::ReasonRetired,
        Field::Constructor,
        Field::Engine,
        Field::Tyre,
        Field::Country,
        Field::Status,
    ];

    /// JSON key used by the data contract.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Grid => "grid",
            Self::Laps => "laps",
            Self::CircuitType => "circuitType",
            Self::ReasonRetired => "reasonRetired",
            Self::Constructor => "constructor",
            Self::Engine => "engine",
            Self::Tyre => "tyre",
            Self::Country => "country",
            Self::Status => "status",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Natural axis kind for the attribute's value type.
    #[must_use]
    pub const fn kind(self) -> AxisKind {
        match self {
            Self::Year | Self::Grid | Self::Laps => AxisKind::Numeric,
            _ => AxisKind::Categorical,
        }
    }
}

/// Borrowed view of one record attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

impl Record {
    #[must_use]
    pub fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        let numeric = |value: Option<i64>| value.map(|v| FieldValue::Numeric(v as f64));
        match field {
            Field::Year => numeric(self.year),
            Field::Grid => numeric(self.grid),
            Field::Laps => numeric(self.laps),
            Field::CircuitType => text(&self.circuit_type),
            Field::ReasonRetired => text(&self.reason_retired),
            Field::Constructor => text(&self.constructor),
            Field::Engine => text(&self.engine),
            Field::Tyre => text(&self.tyre),
            Field::Country => text(&self.country),
            Field::Status => text(&self.status),
        }
    }

    /// Display string for detail panels; undefined values render as `n/a`.
    #[must_use]
    pub fn display_value(&self, field: Field) -> String {
        match self.value(field) {
            Some(FieldValue::Numeric(value)) => format!("{value}"),
            Some(FieldValue::Categorical(value)) => value.to_owned(),
            None => "n/a".to_owned(),
        }
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Categorical)
}

fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.is_finite() && value.fract() == 0.0)
                .map(|value| value as i64)
        }),
        _ => None,
    })
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldValue, Record};

    #[test]
    fn integer_fields_accept_integral_floats_and_drop_fractions() {
        let record: Record =
            serde_json::from_str(r#"{"year": 2020.0, "grid": 3.5, "laps": null}"#).expect("parse");
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.grid, None);
        assert_eq!(record.laps, None);
    }

    #[test]
    fn text_fields_drop_non_string_values() {
        let record: Record = serde_json::from_str(
            r#"{"year": 2020, "constructor": 123, "engine": true, "tyre": ["C3"], "country": "Italy"}"#,
        )
        .expect("parse");
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.constructor, None);
        assert_eq!(record.engine, None);
        assert_eq!(record.tyre, None);
        assert_eq!(record.country.as_deref(), Some("Italy"));
    }

    #[test]
    fn field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("driver"), None);
    }

    #[test]
    fn value_reads_camel_case_attributes() {
        let record: Record = serde_json::from_str(
            r#"{"circuitType": "street", "reasonRetired": "Engine", "country": "Monaco"}"#,
        )
        .expect("parse");
        assert_eq!(
            record.value(Field::CircuitType),
            Some(FieldValue::Categorical("street"))
        );
        assert_eq!(record.display_value(Field::Year), "n/a");
        assert_eq!(record.display_value(Field::ReasonRetired), "Engine");
    }
}
