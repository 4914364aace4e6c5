use jdiff_common::ParseError;
use serde_json::{Map, Value};

/// Parse raw text and re-serialize it into canonical form.
///
/// Canonical form is pretty-printed JSON with object keys in ascending
/// lexicographic order at every nesting level, a two-space indent per level,
/// and exactly one trailing newline. Two semantically equal documents always
/// normalize to the identical string, so downstream line comparison never
/// registers key order or source whitespace as a difference.
///
/// Numbers keep serde_json's default formatting: integers print exactly,
/// floating values print in shortest round-trip decimal form.
pub fn normalize(text: &str) -> Result<String, ParseError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ParseError::from(&e))?;
    let sorted = sort_keys(value);
    let mut canonical =
        serde_json::to_string_pretty(&sorted).map_err(|e| ParseError::from(&e))?;
    canonical.push('\n');
    Ok(canonical)
}

/// Rebuild a value with object keys sorted at every depth.
///
/// Arrays keep their element order; scalars pass through untouched. Keys are
/// sorted explicitly so canonical order does not depend on whether
/// serde_json's `preserve_order` feature is active.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_keys_at_every_level() {
        let result = normalize(r#"{"b": {"d": 1, "c": 2}, "a": 3}"#).unwrap();
        assert_eq!(
            result,
            "{\n  \"a\": 3,\n  \"b\": {\n    \"c\": 2,\n    \"d\": 1\n  }\n}\n"
        );
    }

    #[test]
    fn key_order_does_not_matter() {
        let left = normalize(r#"{"b": 1, "a": 2}"#).unwrap();
        let right = normalize(r#"{"a": 2, "b": 1}"#).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn idempotent() {
        let once = normalize(r#"{"z":[1,{"y":true,"x":null}],"a":"s"}"#).unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn arrays_keep_element_order() {
        let result = normalize(r#"[3, 1, 2]"#).unwrap();
        assert_eq!(result, "[\n  3,\n  1,\n  2\n]\n");
    }

    #[test]
    fn scalars_round_trip() {
        assert_eq!(normalize("null").unwrap(), "null\n");
        assert_eq!(normalize("true").unwrap(), "true\n");
        assert_eq!(normalize(r#""hi""#).unwrap(), "\"hi\"\n");
    }

    #[test]
    fn number_spellings_collapse() {
        assert_eq!(normalize("30").unwrap(), "30\n");
        assert_eq!(normalize("30.0").unwrap(), normalize("3e1").unwrap());
    }

    #[test]
    fn invalid_input_reports_position() {
        let err = normalize("{\n  \"a\": ,\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.detail.contains("line 2"));
    }

    #[test]
    fn whitespace_differences_disappear() {
        let compact = normalize(r#"{"a":1,"b":[true,false]}"#).unwrap();
        let sprawling = normalize("{ \"a\" : 1 ,\n\t\"b\" : [ true , false ] }").unwrap();
        assert_eq!(compact, sprawling);
    }
}
