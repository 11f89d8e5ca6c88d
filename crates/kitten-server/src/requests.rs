//! Request bodies and their validation into storage inputs.
//!
//! Bodies are deserialized loosely (numbers may arrive as strings, dates as
//! free text) and then checked field by field so each failure can carry the
//! exact client-facing message. Update bodies keep three states per field:
//! absent, explicit `null`, and a value.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use kitten_core::entities::{NewKitten, NewMeasurement};
use kitten_core::enums::{KittenStatus, Sex};
use kitten_db::updates::kitten::KittenUpdate;
use kitten_db::updates::measurement::MeasurementUpdate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Distinguishes a missing field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateKittenRequest {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub rescue_date: Option<String>,
    pub color: Option<String>,
    pub sex: Option<Sex>,
    pub status: Option<KittenStatus>,
    pub notes: Option<String>,
}

impl CreateKittenRequest {
    pub fn validate(self) -> ApiResult<NewKitten> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::validation("Name is required"))?;

        Ok(NewKitten {
            name: name.to_string(),
            birth_date: parse_calendar_date("birth_date", self.birth_date)?,
            rescue_date: parse_calendar_date("rescue_date", self.rescue_date)?,
            color: non_blank(self.color),
            sex: self.sex.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            notes: non_blank(self.notes),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateKittenRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rescue_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sex: Option<Option<Sex>>,
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<KittenStatus>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl UpdateKittenRequest {
    pub fn validate(self) -> ApiResult<KittenUpdate> {
        let name = match self.name {
            None => None,
            Some(name) => {
                let trimmed = name.as_deref().map(str::trim).unwrap_or_default();
                if trimmed.is_empty() {
                    return Err(ApiError::validation("Name cannot be empty"));
                }
                Some(trimmed.to_string())
            }
        };

        Ok(KittenUpdate {
            name,
            birth_date: self
                .birth_date
                .map(|date| parse_calendar_date("birth_date", date))
                .transpose()?,
            rescue_date: self
                .rescue_date
                .map(|date| parse_calendar_date("rescue_date", date))
                .transpose()?,
            color: self.color.map(non_blank),
            sex: self
                .sex
                .map(|sex| sex.ok_or_else(|| ApiError::validation("Sex cannot be null")))
                .transpose()?,
            status: self
                .status
                .map(|status| status.ok_or_else(|| ApiError::validation("Status cannot be null")))
                .transpose()?,
            notes: self.notes.map(non_blank),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateWeightRequest {
    pub kitten_id: Option<Value>,
    pub weight_grams: Option<Value>,
    pub measurement_date: Option<String>,
    pub notes: Option<String>,
}

impl CreateWeightRequest {
    pub fn validate(self) -> ApiResult<NewMeasurement> {
        let (Some(kitten_id), Some(weight_grams)) = (self.kitten_id, self.weight_grams) else {
            return Err(ApiError::validation("Kitten ID and weight are required"));
        };
        let (Some(kitten_id), Some(weight_grams)) =
            (integer_value(&kitten_id), integer_value(&weight_grams))
        else {
            return Err(ApiError::validation("Invalid kitten ID or weight value"));
        };
        if weight_grams <= 0 {
            return Err(ApiError::validation("Weight must be greater than 0"));
        }

        let measurement_date = match non_blank(self.measurement_date) {
            Some(text) => Some(
                parse_timestamp(&text)
                    .ok_or_else(|| ApiError::validation("Invalid measurement_date"))?,
            ),
            None => None,
        };

        Ok(NewMeasurement {
            kitten_id,
            weight_grams,
            measurement_date,
            notes: non_blank(self.notes),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWeightRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub weight_grams: Option<Option<Value>>,
    #[serde(default, deserialize_with = "double_option")]
    pub measurement_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl UpdateWeightRequest {
    pub fn validate(self) -> ApiResult<MeasurementUpdate> {
        let weight_grams = match self.weight_grams {
            None => None,
            Some(value) => Some(
                value
                    .as_ref()
                    .and_then(integer_value)
                    .filter(|grams| *grams > 0)
                    .ok_or_else(|| ApiError::validation("Weight must be a positive number"))?,
            ),
        };

        let measurement_date = match self.measurement_date {
            None => None,
            Some(text) => Some(
                text.as_deref()
                    .and_then(parse_timestamp)
                    .ok_or_else(|| ApiError::validation("Invalid measurement_date"))?,
            ),
        };

        Ok(MeasurementUpdate {
            weight_grams,
            measurement_date,
            notes: self.notes.map(non_blank),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SampleDataRequest {
    pub action: Option<String>,
}

/// `GET /weights` query string. Values stay raw so bad input maps to our messages.
#[derive(Debug, Default, Deserialize)]
pub struct WeightsQuery {
    pub kitten_id: Option<String>,
    pub limit: Option<String>,
}

/// An integer from a JSON number or a string holding one. Fractions are rejected.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Blank strings count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Years that round-trip through the fixed-width stored text form.
fn storable_year(year: i32) -> bool {
    (0..=9999).contains(&year)
}

fn parse_calendar_date(field: &str, value: Option<String>) -> ApiResult<Option<NaiveDate>> {
    non_blank(value)
        .map(|text| {
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .ok()
                .filter(|date| storable_year(date.year()))
                .ok_or_else(|| ApiError::validation(format!("Invalid {field}")))
        })
        .transpose()
}

/// RFC 3339, a zone-less `YYYY-MM-DDTHH:MM[:SS[.fff]]` taken as UTC, or a bare
/// date at UTC midnight. The UTC year must be within 0..=9999.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    parse_any_timestamp(text.trim()).filter(|dt| storable_year(dt.year()))
}

fn parse_any_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn message(err: ApiError) -> String {
        err.to_string()
    }

    #[rstest]
    #[case("2024-05-25T07:30:00Z", Utc.with_ymd_and_hms(2024, 5, 25, 7, 30, 0).unwrap())]
    #[case("2024-05-25T09:30:00+02:00", Utc.with_ymd_and_hms(2024, 5, 25, 7, 30, 0).unwrap())]
    #[case("2024-05-25T07:30", Utc.with_ymd_and_hms(2024, 5, 25, 7, 30, 0).unwrap())]
    #[case("2024-05-25T07:30:15", Utc.with_ymd_and_hms(2024, 5, 25, 7, 30, 15).unwrap())]
    #[case("2024-05-25", Utc.with_ymd_and_hms(2024, 5, 25, 0, 0, 0).unwrap())]
    fn timestamps_accepted(#[case] input: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(parse_timestamp(input), Some(expected));
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2024-13-01")]
    #[case("25/05/2024")]
    #[case("+10000-01-01")]
    #[case("-0001-01-01")]
    #[case("+10000-01-01T08:00")]
    #[case("9999-12-31T23:00:00-05:00")]
    fn timestamps_rejected(#[case] input: &str) {
        assert_eq!(parse_timestamp(input), None);
    }

    #[rstest]
    #[case(json!(85), Some(85))]
    #[case(json!("85"), Some(85))]
    #[case(json!(" 12 "), Some(12))]
    #[case(json!(85.5), None)]
    #[case(json!("heavy"), None)]
    #[case(json!(true), None)]
    fn integer_values(#[case] value: Value, #[case] expected: Option<i64>) {
        assert_eq!(integer_value(&value), expected);
    }

    #[test]
    fn create_kitten_trims_and_defaults() {
        let req: CreateKittenRequest =
            serde_json::from_value(json!({"name": "  Mittens ", "color": ""})).unwrap();
        let kitten = req.validate().unwrap();
        assert_eq!(kitten.name, "Mittens");
        assert_eq!(kitten.color, None);
        assert_eq!(kitten.sex, Sex::Unknown);
        assert_eq!(kitten.status, KittenStatus::Active);
    }

    #[test]
    fn create_kitten_requires_name() {
        let missing = CreateKittenRequest::default().validate().unwrap_err();
        assert_eq!(message(missing), "Name is required");

        let blank: CreateKittenRequest = serde_json::from_value(json!({"name": "   "})).unwrap();
        assert_eq!(message(blank.validate().unwrap_err()), "Name is required");
    }

    #[rstest]
    #[case("+10000-01-01")]
    #[case("-0001-01-01")]
    fn create_kitten_rejects_unstorable_year(#[case] date: &str) {
        let req: CreateKittenRequest =
            serde_json::from_value(json!({"name": "Shadow", "birth_date": date})).unwrap();
        assert_eq!(message(req.validate().unwrap_err()), "Invalid birth_date");
    }

    #[test]
    fn create_kitten_rejects_bad_date() {
        let req: CreateKittenRequest =
            serde_json::from_value(json!({"name": "Shadow", "birth_date": "April"})).unwrap();
        assert_eq!(message(req.validate().unwrap_err()), "Invalid birth_date");
    }

    #[test]
    fn update_kitten_tri_state() {
        let req: UpdateKittenRequest =
            serde_json::from_value(json!({"color": null, "notes": "fed", "status": "Adopted"}))
                .unwrap();
        let update = req.validate().unwrap();
        assert_eq!(update.color, Some(None));
        assert_eq!(update.notes, Some(Some("fed".into())));
        assert_eq!(update.status, Some(KittenStatus::Adopted));
        assert_eq!(update.name, None);
        assert_eq!(update.birth_date, None);
    }

    #[rstest]
    #[case(json!({"name": null}), "Name cannot be empty")]
    #[case(json!({"name": "  "}), "Name cannot be empty")]
    #[case(json!({"sex": null}), "Sex cannot be null")]
    #[case(json!({"status": null}), "Status cannot be null")]
    #[case(json!({"rescue_date": "soon"}), "Invalid rescue_date")]
    fn update_kitten_rejections(#[case] body: Value, #[case] expected: &str) {
        let req: UpdateKittenRequest = serde_json::from_value(body).unwrap();
        assert_eq!(message(req.validate().unwrap_err()), expected);
    }

    #[rstest]
    #[case(json!({"weight_grams": 100}), "Kitten ID and weight are required")]
    #[case(json!({"kitten_id": 1, "weight_grams": null}), "Kitten ID and weight are required")]
    #[case(json!({"kitten_id": "one", "weight_grams": 100}), "Invalid kitten ID or weight value")]
    #[case(json!({"kitten_id": 1, "weight_grams": 99.5}), "Invalid kitten ID or weight value")]
    #[case(json!({"kitten_id": 1, "weight_grams": 0}), "Weight must be greater than 0")]
    #[case(json!({"kitten_id": 1, "weight_grams": -4}), "Weight must be greater than 0")]
    #[case(
        json!({"kitten_id": 1, "weight_grams": 90, "measurement_date": "noon"}),
        "Invalid measurement_date"
    )]
    fn create_weight_rejections(#[case] body: Value, #[case] expected: &str) {
        let req: CreateWeightRequest = serde_json::from_value(body).unwrap();
        assert_eq!(message(req.validate().unwrap_err()), expected);
    }

    #[test]
    fn create_weight_accepts_string_numbers() {
        let req: CreateWeightRequest = serde_json::from_value(
            json!({"kitten_id": "3", "weight_grams": "150", "measurement_date": "2024-06-01"}),
        )
        .unwrap();
        let measurement = req.validate().unwrap();
        assert_eq!(measurement.kitten_id, 3);
        assert_eq!(measurement.weight_grams, 150);
        assert_eq!(
            measurement.measurement_date,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).single()
        );
        assert_eq!(measurement.notes, None);
    }

    #[rstest]
    #[case(json!({"weight_grams": 0}))]
    #[case(json!({"weight_grams": "-5"}))]
    #[case(json!({"weight_grams": null}))]
    #[case(json!({"weight_grams": "lots"}))]
    fn update_weight_rejects_non_positive(#[case] body: Value) {
        let req: UpdateWeightRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            message(req.validate().unwrap_err()),
            "Weight must be a positive number"
        );
    }

    #[test]
    fn update_weight_clears_notes_and_keeps_absent_fields() {
        let req: UpdateWeightRequest =
            serde_json::from_value(json!({"notes": null, "weight_grams": "120"})).unwrap();
        let update = req.validate().unwrap();
        assert_eq!(update.weight_grams, Some(120));
        assert_eq!(update.notes, Some(None));
        assert_eq!(update.measurement_date, None);
    }

    #[test]
    fn update_weight_rejects_null_date() {
        let req: UpdateWeightRequest =
            serde_json::from_value(json!({"measurement_date": null})).unwrap();
        assert_eq!(message(req.validate().unwrap_err()), "Invalid measurement_date");
    }
}
