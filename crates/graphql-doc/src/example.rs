//! Example values for leaf types. Response examples are JSON values, request examples
//! are GraphQL literals, so strings are quoted in requests only through the literal
//! syntax and enum values stay bare.

use crate::{Primitive, TypeKind};
use serde_json::Value;

/// The JSON value a leaf of this kind shows in an example response.
pub(crate) fn response(kind: TypeKind<'_>, example: Option<&str>) -> Value {
    match (kind, example) {
        (TypeKind::Scalar(Primitive::Boolean), None) => Value::Bool(true),
        (TypeKind::Scalar(Primitive::Boolean), Some(example)) => Value::Bool(parse_bool(example)),
        (TypeKind::Scalar(primitive), None) if primitive.is_numeric() => Value::from(1),
        (TypeKind::Scalar(primitive), Some(example)) if primitive.is_numeric() => {
            serde_json::from_str::<serde_json::Number>(example)
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(example.to_owned()))
        }
        (TypeKind::Enum(variants), None) => Value::String(variants.first().cloned().unwrap_or_default()),
        (_, example) => Value::String(example.unwrap_or_default().to_owned()),
    }
}

/// The GraphQL literal a leaf of this kind shows in an example request.
pub(crate) fn request(kind: TypeKind<'_>, example: Option<&str>) -> String {
    match (kind, example) {
        (TypeKind::Scalar(Primitive::Boolean), example) => example.is_none_or(parse_bool).to_string(),
        (TypeKind::Scalar(primitive), example) if primitive.is_numeric() => example.unwrap_or("1").to_owned(),
        (TypeKind::Enum(variants), example) => match example.or(variants.first().map(String::as_str)) {
            Some(variant) => variant.to_owned(),
            None => string_literal(""),
        },
        (_, example) => string_literal(example.unwrap_or_default()),
    }
}

fn parse_bool(example: &str) -> bool {
    example.trim().eq_ignore_ascii_case("true")
}

/// JSON string escapes are a subset of GraphQL string escapes.
fn string_literal(value: &str) -> String {
    Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STRING: TypeKind<'static> = TypeKind::Scalar(Primitive::String);
    const BOOLEAN: TypeKind<'static> = TypeKind::Scalar(Primitive::Boolean);
    const INTEGER: TypeKind<'static> = TypeKind::Scalar(Primitive::Integer);

    #[test]
    fn defaults() {
        let variants = ["ADMIN".to_owned(), "USER".to_owned()];
        let role = TypeKind::Enum(&variants);

        assert_eq!(response(BOOLEAN, None), json!(true));
        assert_eq!(response(INTEGER, None), json!(1));
        assert_eq!(response(TypeKind::Scalar(Primitive::Float), None), json!(1));
        assert_eq!(response(role, None), json!("ADMIN"));
        assert_eq!(response(STRING, None), json!(""));
        assert_eq!(response(TypeKind::Scalar(Primitive::Temporal), None), json!(""));

        assert_eq!(request(BOOLEAN, None), "true");
        assert_eq!(request(INTEGER, None), "1");
        assert_eq!(request(role, None), "ADMIN");
        assert_eq!(request(STRING, None), r#""""#);
    }

    #[test]
    fn overrides() {
        let variants = ["ADMIN".to_owned()];
        let role = TypeKind::Enum(&variants);

        assert_eq!(response(BOOLEAN, Some("false")), json!(false));
        assert_eq!(response(BOOLEAN, Some("TRUE")), json!(true));
        assert_eq!(response(INTEGER, Some("42")), json!(42));
        assert_eq!(response(INTEGER, Some("4.5")), json!(4.5));
        assert_eq!(response(INTEGER, Some("many")), json!("many"));
        assert_eq!(response(role, Some("GUEST")), json!("GUEST"));
        assert_eq!(response(STRING, Some("Ada")), json!("Ada"));

        assert_eq!(request(BOOLEAN, Some("no")), "false");
        assert_eq!(request(INTEGER, Some("42")), "42");
        assert_eq!(request(role, Some("GUEST")), "GUEST");
        assert_eq!(request(STRING, Some(r#"say "hi""#)), r#""say \"hi\"""#);
    }

    #[test]
    fn enum_without_variants() {
        assert_eq!(response(TypeKind::Enum(&[]), None), json!(""));
        assert_eq!(request(TypeKind::Enum(&[]), None), r#""""#);
    }
}
