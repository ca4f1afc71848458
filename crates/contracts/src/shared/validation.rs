//! Client-side form validation helpers.
//!
//! Every dialog form derives `validator::Validate`; the helpers here turn the
//! derive output into per-field messages the UI can render inline, and gate
//! submission so that nothing is sent for an invalid form.

use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Field name -> first failing rule's message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .first()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .unwrap_or_default();
            map.insert(field.to_string(), message);
        }
        FormErrors(map)
    }
}

/// Run the form's declarative schema.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FormErrors> {
    form.validate().map_err(FormErrors::from)
}

/// Run `submit` only when `form` passes its schema.
///
/// Dialogs dispatch their request from inside `submit`, so an invalid form
/// never reaches the network.
pub fn validate_then<T, R>(form: &T, submit: impl FnOnce(&T) -> R) -> Result<R, FormErrors>
where
    T: Validate,
{
    validate_form(form)?;
    Ok(submit(form))
}

/// Parse a decimal text input. Empty or malformed text yields `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer text input. Fractions, empty or malformed text yield `None`.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "too short"))]
        name: String,
        #[validate(range(min = 0, message = "negative"))]
        count: i64,
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("9.99"), Some(9.99));
        assert_eq!(parse_decimal(" 12 "), Some(12.0));
        assert_eq!(parse_decimal("-1"), Some(-1.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("5"), Some(5));
        assert_eq!(parse_integer("5.5"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("x"), None);
    }

    #[test]
    fn test_errors_keep_first_message_per_field() {
        let form = Sample {
            name: "a".to_string(),
            count: -1,
        };
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("too short"));
        assert_eq!(errors.get("count"), Some("negative"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["count", "name"]);
    }

    #[test]
    fn test_validate_then_skips_submit_on_invalid_form() {
        let mut calls = 0;
        let form = Sample {
            name: "a".to_string(),
            count: 1,
        };
        let res = validate_then(&form, |_| calls += 1);
        assert!(res.is_err());
        assert_eq!(calls, 0);

        let form = Sample {
            name: "ok".to_string(),
            count: 1,
        };
        let res = validate_then(&form, |f| f.name.clone());
        assert_eq!(res, Ok("ok".to_string()));
    }
}
