//! # Scalar Resolution
//!
//! JSON carries unquoted primitive tokens without saying which native type
//! they are. [`resolve`] settles the question with a fixed precedence, and
//! [`content`] performs the inverse extraction of a wire primitive's literal
//! text for schema slots that store plain strings.

use crate::error::Error;
use crate::value::Value;
use crate::Result;

/// Resolves an unquoted primitive token to a typed [`Value`].
///
/// Attempts, in order: boolean, 64-bit signed integer, double-precision
/// float. The first match wins, so a syntactically valid integer is never
/// widened to a float. String tokens must not be passed here: JSON's grammar
/// already distinguishes them and they stay strings without resolution.
///
/// # Errors
///
/// Returns `Error::MalformedLiteral` when no step matches. A float parse
/// producing a non-finite value counts as no match.
pub fn resolve(token: &str) -> Result<Value> {
    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(i) = token.parse::<i64>() {
        return Ok(Value::Integer(i));
    }
    if let Ok(f) = token.parse::<f64>() {
        if f.is_finite() {
            return Ok(Value::Float(f));
        }
    }
    Err(Error::MalformedLiteral(token.to_string()))
}

/// Extracts the literal content of a wire primitive as text.
///
/// Strings yield their content verbatim; booleans and numbers yield their
/// canonical token text. An explicit JSON `null` yields the four-character
/// string `"null"`, which schema slots that use this extraction store as-is.
///
/// # Errors
///
/// Returns `Error::MalformedLiteral` when the value is an array or object.
pub fn content(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::Null => Ok("null".to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(Error::MalformedLiteral(value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(resolve("true").expect("should resolve"), Value::Bool(true));
        assert_eq!(resolve("false").expect("should resolve"), Value::Bool(false));
        assert_eq!(resolve("42").expect("should resolve"), Value::Integer(42));
        assert_eq!(resolve("-7").expect("should resolve"), Value::Integer(-7));
        assert_eq!(resolve("42.5").expect("should resolve"), Value::Float(42.5));
        assert_eq!(resolve("1e3").expect("should resolve"), Value::Float(1000.0));
    }

    #[test]
    fn integer_not_widened() {
        // 2^53 + 1 is not representable as f64; the integer step must win
        let resolved = resolve("9007199254740993").expect("should resolve");
        assert_eq!(resolved, Value::Integer(9_007_199_254_740_993));
    }

    #[test]
    fn overflow_degrades_to_float() {
        // beyond i64::MAX the integer step fails and the float step catches it
        let resolved = resolve("18446744073709551615").expect("should resolve");
        assert_eq!(resolved, Value::Float(18_446_744_073_709_551_615.0));
    }

    #[test]
    fn unresolvable_token() {
        let err = resolve("not-a-literal").expect_err("should fail");
        assert!(matches!(err, Error::MalformedLiteral(t) if t == "not-a-literal"));
    }

    #[test]
    fn non_finite_rejected() {
        // f64::from_str accepts "inf" and "NaN" but JSON has no such tokens
        assert!(resolve("inf").is_err());
        assert!(resolve("NaN").is_err());
    }

    #[test]
    fn primitive_content() {
        assert_eq!(content(&serde_json::json!("abc")).expect("should extract"), "abc");
        assert_eq!(content(&serde_json::json!(12)).expect("should extract"), "12");
        assert_eq!(content(&serde_json::json!(true)).expect("should extract"), "true");
        assert_eq!(content(&serde_json::Value::Null).expect("should extract"), "null");
    }

    #[test]
    fn composite_content_rejected() {
        let err = content(&serde_json::json!({"a": 1})).expect_err("should fail");
        assert!(matches!(err, Error::MalformedLiteral(_)));
    }
}
