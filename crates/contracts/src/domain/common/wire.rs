//! Lenient decoders for backend payloads.
//!
//! The REST backend serialises primary keys as integers and decimal columns
//! as strings (`"9.99"`), but fixtures and older endpoints send plain numbers.
//! Every resource accepts both shapes.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(f64),
    Text(String),
}

/// Identifier sent either as `1` or `"1"`.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(n) => Ok(n.to_string()),
        IdRepr::Text(s) => Ok(s),
    }
}

/// Decimal amount sent either as `9.99` or `"9.99"`.
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(v) => Ok(v),
        AmountRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount: {s:?}"))),
    }
}

/// Optional text column; `null` becomes an empty string.
pub fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "de_id")]
        id: String,
        #[serde(deserialize_with = "de_amount")]
        amount: f64,
        #[serde(default, deserialize_with = "de_text")]
        note: String,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let a: Row = serde_json::from_value(json!({"id": 7, "amount": 1.5})).unwrap();
        let b: Row = serde_json::from_value(json!({"id": "7", "amount": 1.5})).unwrap();
        assert_eq!(a.id, "7");
        assert_eq!(b.id, "7");
    }

    #[test]
    fn test_decimal_strings() {
        let row: Row = serde_json::from_value(json!({"id": 1, "amount": "5299.99"})).unwrap();
        assert_eq!(row.amount, 5299.99);

        let row: Row = serde_json::from_value(json!({"id": 1, "amount": 12})).unwrap();
        assert_eq!(row.amount, 12.0);
    }

    #[test]
    fn test_bad_amount_is_rejected() {
        let res: Result<Row, _> = serde_json::from_value(json!({"id": 1, "amount": "abc"}));
        assert!(res.is_err());
    }

    #[test]
    fn test_null_and_missing_text() {
        let row: Row =
            serde_json::from_value(json!({"id": 1, "amount": 0, "note": null})).unwrap();
        assert_eq!(row.note, "");

        let row: Row = serde_json::from_value(json!({"id": 1, "amount": 0})).unwrap();
        assert_eq!(row.note, "");
    }
}
