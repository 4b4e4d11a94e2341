use crate::{ConvertError, ConvertResult};
use serde_json::Value;
use shape_val::Node;

/// Encodes a node as compact JSON, keys in insertion order.
pub fn encode(node: &Node) -> String {
    match serde_json::to_string(node) {
        Ok(text) => text,
        // keys are always strings and non-finite floats become null,
        // so serializing a node has no failure path
        Err(_) => "null".to_string(),
    }
}

/// Strictly decodes JSON text.
pub fn decode(text: &str) -> ConvertResult<Node> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ConvertError::parse("json", e.to_string()))?;
    Ok(from_value(value))
}

pub fn from_value(value: Value) -> Node {
    match value {
        Value::Null => Node::nil(),
        Value::Bool(b) => Node::bool(b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Node::int(i),
            (None, Some(f)) => Node::float(f),
            (None, None) => Node::nil(),
        },
        Value::String(s) => Node::str(s),
        Value::Array(items) => Node::Array(items.into_iter().map(from_value).collect()),
        Value::Object(map) => Node::Obj(
            map.into_iter()
                .map(|(k, v)| (k, from_value(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_val::obj;

    #[test]
    fn test_encode_is_compact_and_ordered() {
        let node = Node::from(obj! {
            "key" => "value",
            "number" => 1337,
            "boolean" => true,
            "float" => 1.5,
            "array" => vec![1, 2, 3],
        });
        assert_eq!(
            encode(&node),
            r#"{"key":"value","number":1337,"boolean":true,"float":1.5,"array":[1,2,3]}"#
        );
    }

    #[test]
    fn test_encode_special_values() {
        assert_eq!(encode(&Node::nil()), "null");
        assert_eq!(encode(&Node::float(f64::NAN)), "null");
        assert_eq!(encode(&Node::float(2.0)), "2.0");
        assert_eq!(encode(&Node::str("a\"b")), r#""a\"b""#);
    }

    #[test]
    fn test_decode_numbers() {
        assert_eq!(decode("1337").unwrap(), Node::int(1337));
        assert_eq!(decode("1.5").unwrap(), Node::float(1.5));
        assert_eq!(decode("1.0").unwrap(), Node::float(1.0));
        assert_eq!(
            decode("18446744073709551615").unwrap(),
            Node::float(18446744073709551615.0)
        );
    }

    #[test]
    fn test_decode_keeps_key_order() {
        let node = decode(r#"{"z":1,"a":{"y":null,"b":[true]}}"#).unwrap();
        assert_eq!(
            node,
            Node::from(obj! { "z" => 1, "a" => obj! { "y" => Node::nil(), "b" => vec![true] } })
        );
        assert_eq!(encode(&node), r#"{"z":1,"a":{"y":null,"b":[true]}}"#);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode("{\"a\":}"),
            Err(ConvertError::Parse { format: "json", .. })
        ));
        assert!(decode("").is_err());
        assert!(decode("<root/>").is_err());
    }
}
