//! Action record shape.
//!
//! An action is a plain record with a required `name` and optional `data` and
//! `metadata` records. Checks run in a fixed order and the first violation wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::value::Value;
use crate::error::{ActionField, ValidationError};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_]+$").expect("action name pattern compiles"));

/// Validate that `candidate` is a well-formed action record.
pub fn validate_action(candidate: &Value) -> Result<(), ValidationError> {
    let action = candidate.as_object().ok_or(ValidationError::InvalidShape)?;

    let name = action
        .get(ActionField::Name.key())
        .ok_or(ValidationError::MissingField)?;
    if !name.as_str().is_some_and(is_action_name) {
        return Err(ValidationError::InvalidField(ActionField::Name));
    }

    for field in [ActionField::Data, ActionField::Metadata] {
        if action
            .get(field.key())
            .is_some_and(|value| !value.is_plain_object())
        {
            return Err(ValidationError::InvalidField(field));
        }
    }

    if let Some(unknown) = action
        .keys()
        .find(|key| !ActionField::ALL.iter().any(|field| field.key() == key.as_str()))
    {
        return Err(ValidationError::UnknownField {
            field: unknown.clone(),
        });
    }

    Ok(())
}

/// True if `name` is one or more uppercase ASCII letters or underscores.
fn is_action_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Map;
    use crate::test_support::{action, handler, instance, record};
    use proptest::prelude::*;
    use serde_json::json;

    fn reject(value: Value) -> ValidationError {
        validate_action(&value).expect_err("action should be rejected")
    }

    #[test]
    fn rejects_non_plain_objects() {
        for value in [
            Value::Null,
            Value::from("FOO"),
            Value::from(json!(1)),
            Value::from(json!([{"name": "FOO"}])),
            instance("Action", record([("name", Value::from("FOO"))])),
            Value::from(handler()),
        ] {
            let err = reject(value);
            assert_eq!(err, ValidationError::InvalidShape);
            assert_eq!(err.to_string(), "Action definition must be a plain object.");
        }
    }

    #[test]
    fn rejects_missing_name() {
        let err = reject(Value::from(json!({})));
        assert_eq!(err, ValidationError::MissingField);
        assert_eq!(
            err.to_string(),
            "Action definition object must define \"name\" property."
        );
    }

    #[test]
    fn missing_name_is_reported_before_unknown_fields() {
        let err = reject(Value::from(json!({"foo": "bar", "data": 1})));
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn rejects_lowercase_name() {
        let err = reject(action(json!({"name": "lowercase"})));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Name));
        assert_eq!(
            err.to_string(),
            "Action definition object \"name\" property value must consist only of uppercase alphabetical characters and underscores."
        );
    }

    #[test]
    fn rejects_empty_and_non_string_names() {
        for name in [json!(""), json!(null), json!(42), json!(["FOO"]), json!({})] {
            let err = reject(action(json!({ "name": name })));
            assert_eq!(err, ValidationError::InvalidField(ActionField::Name));
        }
    }

    #[test]
    fn rejects_non_object_data() {
        let err = reject(action(json!({"name": "FOO", "data": "not object"})));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Data));
        assert_eq!(
            err.to_string(),
            "Action definition object \"data\" property value must be a plain object."
        );
    }

    #[test]
    fn rejects_null_data() {
        let err = reject(action(json!({"name": "FOO", "data": null})));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Data));
    }

    #[test]
    fn rejects_non_object_metadata() {
        let err = reject(action(json!({"name": "FOO", "metadata": "not object"})));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Metadata));
        assert_eq!(
            err.to_string(),
            "Action definition object \"metadata\" property value must be a plain object."
        );
    }

    #[test]
    fn data_is_checked_before_metadata() {
        let err = reject(action(json!({"name": "FOO", "data": [], "metadata": 1})));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Data));
    }

    #[test]
    fn rejects_instance_metadata() {
        let mut map = record([("name", Value::from("FOO"))]);
        map.insert("metadata".to_string(), instance("Date", Map::new()));
        let err = reject(Value::Object(map));
        assert_eq!(err, ValidationError::InvalidField(ActionField::Metadata));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = reject(action(json!({"name": "FOO", "foo": "bar"})));
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "foo".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Action definition object must not define unknown properties."
        );
    }

    #[test]
    fn accepts_minimal_and_full_actions() {
        validate_action(&action(json!({"name": "FOO"}))).expect("name only");
        validate_action(&action(json!({"name": "FOO", "data": {}, "metadata": {}})))
            .expect("all fields");
        validate_action(&action(json!({
            "name": "ADD_TODO",
            "data": {"text": "write tests", "tags": ["a"]},
            "metadata": {"at": 1}
        })))
        .expect("nested payload");
    }

    #[test]
    fn repeated_calls_agree() {
        let bad = action(json!({"name": "FOO", "extra": true}));
        assert_eq!(validate_action(&bad), validate_action(&bad));
        let good = action(json!({"name": "FOO"}));
        assert_eq!(validate_action(&good), Ok(()));
        assert_eq!(validate_action(&good), Ok(()));
    }

    proptest! {
        #[test]
        fn uppercase_and_underscore_names_are_accepted(name in "[A-Z_]{1,32}") {
            let candidate = action(json!({ "name": name }));
            prop_assert!(validate_action(&candidate).is_ok());
        }

        #[test]
        fn names_with_other_characters_are_rejected(
            prefix in "[A-Z_]{0,8}",
            bad in "[^A-Z_]",
            suffix in "[A-Z_]{0,8}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert_eq!(
                validate_action(&action(json!({ "name": name }))),
                Err(ValidationError::InvalidField(ActionField::Name))
            );
        }
    }
}
