use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Identity carried in the `user_id` claim.
///
/// Opaque at this layer: either an integer or a string, as issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Int(i64),
    Text(String),
}

impl SubjectId {
    /// Integer view, accepting numeric strings as well.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SubjectId::Int(id) => Some(*id),
            SubjectId::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Int(id) => write!(f, "{}", id),
            SubjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        SubjectId::Int(id)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        SubjectId::Text(s.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(s: String) -> Self {
        SubjectId::Text(s)
    }
}

/// Signed token payload.
///
/// `exp` is optional on the way in; issued tokens always carry it.
/// It is a NumericDate: seconds since the epoch, possibly negative or fractional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: SubjectId,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_numeric_date"
    )]
    pub exp: Option<f64>,
}

impl Claims {
    pub fn new(user_id: SubjectId, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            exp: Some(expires_at.timestamp() as f64),
        }
    }

    /// True when `exp` lies more than `leeway_seconds` before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway_seconds: u64) -> bool {
        let Some(exp) = self.exp else {
            return false;
        };
        let now = now.timestamp_micros() as f64 / 1_000_000.0;
        exp + (leeway_seconds as f64) < now
    }
}

// Whole seconds go out as integers, the form every JWT library expects.
fn serialize_numeric_date<S: Serializer>(exp: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match exp {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => s.serialize_i64(*v as i64),
        Some(v) => s.serialize_f64(*v),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subject_decodes_from_number_or_string() {
        let int: Claims = serde_json::from_value(json!({"user_id": 7})).unwrap();
        assert_eq!(int.user_id, SubjectId::Int(7));
        assert_eq!(int.exp, None);

        let text: Claims = serde_json::from_value(json!({"user_id": "abc", "exp": 10})).unwrap();
        assert_eq!(text.user_id, SubjectId::Text("abc".into()));
        assert_eq!(text.exp, Some(10.0));
    }

    #[test]
    fn exp_accepts_negative_and_fractional_numeric_dates() {
        let negative: Claims = serde_json::from_value(json!({"user_id": 1, "exp": -1})).unwrap();
        assert_eq!(negative.exp, Some(-1.0));

        let fractional: Claims =
            serde_json::from_value(json!({"user_id": 1, "exp": 1000.5})).unwrap();
        assert_eq!(fractional.exp, Some(1000.5));

        assert!(serde_json::from_value::<Claims>(json!({"user_id": 1, "exp": "soon"})).is_err());
    }

    #[test]
    fn whole_exp_serializes_as_integer() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let value = serde_json::to_value(Claims::new(SubjectId::Int(1), at)).unwrap();
        assert_eq!(value["exp"], json!(1_700_000_000_i64));
        assert!(value["exp"].is_i64());
    }

    #[test]
    fn expiry_honours_leeway() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        let claims = |exp: Option<f64>| Claims {
            user_id: SubjectId::Int(1),
            exp,
        };

        assert!(claims(Some(999.5)).is_expired_at(now, 0));
        assert!(!claims(Some(999.5)).is_expired_at(now, 1));
        assert!(!claims(Some(1000.5)).is_expired_at(now, 0));
        assert!(!claims(None).is_expired_at(now, 0));
    }

    #[test]
    fn subject_rejects_other_shapes() {
        assert!(serde_json::from_value::<Claims>(json!({"exp": 10})).is_err());
        assert!(serde_json::from_value::<Claims>(json!({"user_id": null})).is_err());
        assert!(serde_json::from_value::<Claims>(json!({"user_id": [1]})).is_err());
    }

    #[test]
    fn numeric_text_reads_as_integer() {
        assert_eq!(SubjectId::from("42").as_i64(), Some(42));
        assert_eq!(SubjectId::from("alice").as_i64(), None);
        assert_eq!(SubjectId::from(5).to_string(), "5");
    }
}
