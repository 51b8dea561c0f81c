use crate::tokenize::{tokenize, Segment, TokenizeError};
use crate::Value;
use thiserror::Error;

/// Resolves `path` against `document`, returning the sub-value it addresses
/// together with the scalar leaves under that sub-value in pre-order. Fails
/// all-or-nothing: a segment that does not fit the document's shape yields an
/// error and no partial result.
pub fn extract(document: &Value, path: &str) -> Result<Extraction, ExtractError> {
    let segments = tokenize(path)?;
    let subvalue = walk(document, &segments)?;
    Ok(Extraction {
        leaves: leaves(subvalue),
        subvalue: subvalue.clone(),
    })
}

/// Result of a successful [`extract`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// the value reached after consuming every path segment
    pub subvalue: Value,
    /// scalar values under `subvalue`, in pre-order
    pub leaves: Vec<Value>,
}

#[derive(Debug, PartialEq, Error)]
pub enum ExtractError {
    #[error("malformed path: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

#[derive(Debug, PartialEq, Error)]
pub enum LookupError {
    #[error("key `{0}` not present in object")]
    MissingKey(String),
    #[error("field `{0}` looked up on a non-object value")]
    NotAnObject(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum IndexError {
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds { index: i64, len: usize },
    #[error("index {0} applied to a non-array value")]
    NotAnArray(i64),
}

fn walk<'a>(document: &'a Value, segments: &[Segment]) -> Result<&'a Value, ExtractError> {
    let mut current = document;

    for segment in segments {
        current = match segment {
            Segment::Field(name) => match current {
                Value::Object(map) => map
                    .get(name)
                    .ok_or_else(|| LookupError::MissingKey(name.clone()))?,
                _ => return Err(LookupError::NotAnObject(name.clone()).into()),
            },
            Segment::Index(index) => match current {
                Value::Array(items) => usize::try_from(*index)
                    .ok()
                    .and_then(|idx| items.get(idx))
                    .ok_or(IndexError::OutOfBounds {
                        index: *index,
                        len: items.len(),
                    })?,
                _ => return Err(IndexError::NotAnArray(*index).into()),
            },
        };
    }

    Ok(current)
}

/// Collects every scalar under `value` in pre-order; a scalar collects itself.
pub fn leaves(value: &Value) -> Vec<Value> {
    let mut collected = Vec::new();
    collect_leaves(value, &mut collected);
    collected
}

fn collect_leaves(value: &Value, collected: &mut Vec<Value>) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                collect_leaves(child, collected);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_leaves(child, collected);
            }
        }
        leaf => collected.push(leaf.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    // the fixture pair from the original smoke test: the full document on one
    // side, the structure under `hoge.var3.baz` on the other
    fn fixture() -> Value {
        doc(json!({
            "hoge": {
                "var1": "fuga",
                "var2": 123,
                "var3": {
                    "bar": true,
                    "baz": {"k": 1, "arr": [2, 3]}
                }
            },
            "piyo": [null, false]
        }))
    }

    #[test]
    fn filters_nested_object() {
        let result = extract(&fixture(), "hoge.var3.baz").unwrap();

        assert_eq!(result.subvalue, doc(json!({"k": 1, "arr": [2, 3]})));
        assert_eq!(
            result.leaves,
            vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
        );
    }

    #[test]
    fn matches_manual_navigation() {
        let result = extract(&fixture(), "hoge.var3.baz").unwrap();

        let expected = json!({"k": 1, "arr": [2, 3]});
        assert_eq!(serde_json::Value::from(result.subvalue), expected);
    }

    #[test]
    fn empty_path_returns_root() {
        let document = fixture();
        let result = extract(&document, "").unwrap();

        assert_eq!(result.subvalue, document);
        assert_eq!(
            result.leaves,
            vec![
                Value::String(String::from("fuga")),
                Value::Number(123.0),
                Value::Boolean(true),
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
                Value::Null,
                Value::Boolean(false),
            ]
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let document = fixture();
        assert_eq!(
            extract(&document, "hoge.var3").unwrap(),
            extract(&document, "hoge.var3").unwrap()
        );
    }

    #[test]
    fn missing_key_fails_lookup() {
        let result = extract(&fixture(), "hoge.var3.baz.missing");
        assert_eq!(
            result,
            Err(ExtractError::Lookup(LookupError::MissingKey(String::from(
                "missing"
            ))))
        );
    }

    #[test]
    fn indexes_into_array() {
        let document = doc(json!({"hoge": {"list": ["a", "b", "c"]}}));
        let result = extract(&document, "hoge.list[2]").unwrap();

        assert!(result.subvalue.is_leaf());
        assert_eq!(result.subvalue, Value::String(String::from("c")));
        assert_eq!(result.leaves, vec![Value::String(String::from("c"))]);
    }

    #[test]
    fn index_at_length_is_out_of_bounds() {
        let document = doc(json!({"hoge": {"list": ["a", "b", "c"]}}));
        let result = extract(&document, "hoge.list[3]");
        assert_eq!(
            result,
            Err(ExtractError::Index(IndexError::OutOfBounds {
                index: 3,
                len: 3
            }))
        );
    }

    #[test]
    fn negative_index_is_out_of_bounds() {
        let document = doc(json!({"hoge": {"list": ["a", "b", "c"]}}));
        let result = extract(&document, "hoge.list[-1]");
        assert_eq!(
            result,
            Err(ExtractError::Index(IndexError::OutOfBounds {
                index: -1,
                len: 3
            }))
        );
    }

    #[test]
    fn field_on_array_fails_lookup() {
        let result = extract(&fixture(), "piyo.length");
        assert_eq!(
            result,
            Err(ExtractError::Lookup(LookupError::NotAnObject(
                String::from("length")
            )))
        );
    }

    #[test]
    fn index_on_object_fails() {
        let result = extract(&fixture(), "hoge[0]");
        assert_eq!(result, Err(ExtractError::Index(IndexError::NotAnArray(0))));
    }

    #[test]
    fn malformed_path_fails_tokenize() {
        let result = extract(&fixture(), "hoge.var3[");
        assert_eq!(
            result,
            Err(ExtractError::Tokenize(TokenizeError::UnclosedBracket))
        );
    }

    #[test]
    fn collects_leaves_of_scalar() {
        assert_eq!(leaves(&Value::Null), vec![Value::Null]);
    }
}
