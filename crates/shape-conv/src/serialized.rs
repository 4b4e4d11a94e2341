//! Length-prefixed serialization text.
//!
//! ```text
//! N;                     nil
//! b:1;                   bool
//! i:1337;                int
//! d:1.5;                 float (INF, -INF, NAN)
//! s:5:"value";           string, length in bytes
//! a:2:{i:0;...i:1;...}   list or mapping, key/value pairs
//! O:8:"stdClass":1:{...} object, decoded as a mapping
//! ```
//!
//! A decoded pair list whose keys are exactly the integers `0..n-1` in order
//! becomes a list; an empty pair list also becomes a list.

use crate::config::DEFAULT_MAX_DEPTH;
use crate::{ConvertError, ConvertResult};
use shape_val::{Node, Obj, Scalar};

pub fn encode(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Scalar(s) => write_scalar(s, out),
        Node::Array(items) => {
            out.push_str(&format!("a:{}:{{", items.len()));
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("i:{};", i));
                write_node(item, out);
            }
            out.push('}');
        }
        Node::Obj(obj) => {
            out.push_str(&format!("a:{}:{{", obj.len()));
            // keys 0..n-1 written as integers would decode as a list
            let string_keys = is_sequential(obj);
            for (key, value) in obj {
                if string_keys {
                    write_str(key, out);
                } else {
                    write_key(key, out);
                }
                write_node(value, out);
            }
            out.push('}');
        }
    }
}

fn write_scalar(value: &Scalar, out: &mut String) {
    match value {
        Scalar::Nil => out.push_str("N;"),
        Scalar::Bool(b) => out.push_str(if *b { "b:1;" } else { "b:0;" }),
        Scalar::Int(i) => out.push_str(&format!("i:{};", i)),
        Scalar::Float(f) => out.push_str(&format!("d:{};", format_float(*f))),
        Scalar::Str(s) => write_str(s, out),
    }
}

fn write_str(s: &str, out: &mut String) {
    out.push_str(&format!("s:{}:\"{}\";", s.len(), s));
}

fn write_key(key: &str, out: &mut String) {
    match key.parse::<i64>() {
        // only the canonical spelling counts as an integer key
        Ok(i) if i.to_string() == key => out.push_str(&format!("i:{};", i)),
        _ => write_str(key, out),
    }
}

fn is_sequential(obj: &Obj) -> bool {
    !obj.is_empty() && obj.keys().enumerate().all(|(i, key)| key == i.to_string())
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        f.to_string()
    }
}

pub fn decode(text: &str) -> ConvertResult<Node> {
    decode_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Decodes `text`, which must hold exactly one value.
pub fn decode_with_depth(text: &str, max_depth: usize) -> ConvertResult<Node> {
    let mut decoder = Decoder {
        input: text.as_bytes(),
        pos: 0,
        max_depth,
    };
    let node = decoder.value(0)?;
    if decoder.pos != decoder.input.len() {
        return Err(decoder.error("trailing data"));
    }
    Ok(node)
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn value(&mut self, depth: usize) -> ConvertResult<Node> {
        let tag = self.next()?;
        match tag {
            b'N' => {
                self.expect(b';')?;
                Ok(Node::nil())
            }
            b'b' => {
                self.expect(b':')?;
                match self.until(b';')? {
                    "0" => Ok(Node::bool(false)),
                    "1" => Ok(Node::bool(true)),
                    other => Err(self.error(format!("invalid bool '{}'", other))),
                }
            }
            b'i' => {
                self.expect(b':')?;
                let i = self.integer(b';')?;
                Ok(Node::int(i))
            }
            b'd' => {
                self.expect(b':')?;
                let raw = self.until(b';')?;
                let f = match raw {
                    "INF" => f64::INFINITY,
                    "-INF" => f64::NEG_INFINITY,
                    "NAN" => f64::NAN,
                    _ => raw
                        .parse::<f64>()
                        .map_err(|_| self.error(format!("invalid float '{}'", raw)))?,
                };
                Ok(Node::float(f))
            }
            b's' => {
                self.expect(b':')?;
                let s = self.string()?;
                self.expect(b';')?;
                Ok(Node::str(s))
            }
            b'a' => {
                self.expect(b':')?;
                let count = self.count()?;
                self.pairs(count, depth)
            }
            b'O' => {
                self.expect(b':')?;
                let _class = self.string()?;
                self.expect(b':')?;
                let count = self.count()?;
                match self.pairs(count, depth)? {
                    Node::Array(items) => Ok(Node::Obj(
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(i, v)| (i.to_string(), v))
                            .collect(),
                    )),
                    node => Ok(node),
                }
            }
            other => Err(self.error(format!("unknown type tag '{}'", other as char))),
        }
    }

    /// Reads `{key value ...}` holding `count` pairs.
    fn pairs(&mut self, count: usize, depth: usize) -> ConvertResult<Node> {
        if depth >= self.max_depth {
            return Err(ConvertError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.expect(b'{')?;

        let mut obj = Obj::new();
        let mut sequential = true;
        for i in 0..count {
            let key = match self.next()? {
                b'i' => {
                    self.expect(b':')?;
                    let k = self.integer(b';')?;
                    if k != i as i64 {
                        sequential = false;
                    }
                    k.to_string()
                }
                b's' => {
                    self.expect(b':')?;
                    let k = self.string()?;
                    self.expect(b';')?;
                    sequential = false;
                    k
                }
                _ => return Err(self.error("invalid key")),
            };
            let value = self.value(depth + 1)?;
            obj.set(key, value);
        }
        self.expect(b'}')?;

        if sequential {
            Ok(Node::Array(obj.into_iter().map(|(_, v)| v).collect()))
        } else {
            Ok(Node::Obj(obj))
        }
    }

    /// Reads `<len>:"<bytes>"`.
    fn string(&mut self) -> ConvertResult<String> {
        let len = self.until(b':')?;
        let len = len
            .parse::<usize>()
            .map_err(|_| self.error(format!("invalid length '{}'", len)))?;
        self.expect(b'"')?;
        let bytes = self.take(len)?;
        let s = std::str::from_utf8(bytes)
            .map_err(|_| self.error("string is not valid utf-8"))?
            .to_string();
        self.expect(b'"')?;
        Ok(s)
    }

    /// Reads `<n>:`, the pair count of a list or object.
    fn count(&mut self) -> ConvertResult<usize> {
        let raw = self.until(b':')?;
        raw.parse::<usize>()
            .map_err(|_| self.error(format!("invalid count '{}'", raw)))
    }

    fn integer(&mut self, end: u8) -> ConvertResult<i64> {
        let raw = self.until(end)?;
        raw.parse::<i64>()
            .map_err(|_| self.error(format!("invalid integer '{}'", raw)))
    }

    fn next(&mut self) -> ConvertResult<u8> {
        match self.input.get(self.pos).copied() {
            Some(b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn expect(&mut self, want: u8) -> ConvertResult<()> {
        let got = self.next()?;
        if got != want {
            return Err(self.error(format!(
                "expected '{}', found '{}'",
                want as char, got as char
            )));
        }
        Ok(())
    }

    /// Returns the text up to `end` and moves past it.
    fn until(&mut self, end: u8) -> ConvertResult<&'a str> {
        let input: &'a [u8] = self.input;
        let rest = &input[self.pos..];
        let Some(offset) = rest.iter().position(|b| *b == end) else {
            return Err(self.error(format!("missing '{}'", end as char)));
        };
        let raw = std::str::from_utf8(&rest[..offset])
            .map_err(|_| self.error("invalid utf-8"))?;
        self.pos += offset + 1;
        Ok(raw)
    }

    fn take(&mut self, len: usize) -> ConvertResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.input.len())
            .ok_or_else(|| self.error("string runs past end of input"))?;
        let input: &'a [u8] = self.input;
        let bytes = &input[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn error(&self, message: impl Into<String>) -> ConvertError {
        ConvertError::parse(
            "serialized",
            format!("{} at offset {}", message.into(), self.pos),
        )
    }
}
