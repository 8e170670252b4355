#![no_main]
use std::fmt::Write;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

static WS_TABLE: &[&str] = &["", " ", "\t", "\n", "\r\n", "  \n\t"];

#[derive(Debug, Arbitrary)]
enum Input {
    /// Arbitrary text: must yield a value or an error, never panic or hang.
    Raw(String),
    /// A valid document rendered twice, compact and padded with whitespace
    /// and trailing commas. Both renderings must parse to the same value.
    Padded { value: ArbitraryValue, pads: Vec<u8> },
}

#[derive(Debug)]
struct ArbitraryValue(Value);

/// Strings without quotes, backslashes or control characters render the same
/// escaped and raw.
fn plain_string(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<String> {
    let s: String = u.arbitrary()?;
    Ok(s.chars()
        .filter(|&c| !matches!(c, '"' | '\\' | '\u{2028}' | '\u{2029}') && !c.is_control())
        .collect())
}

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(u.arbitrary::<u64>()?.into()),
            3..=10 => Value::String(plain_string(u)?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let len = u.arbitrary_len::<u8>()?.min(8);
                let mut m = Map::new();
                for _ in 0..len {
                    let k = plain_string(u)?;
                    let v = ArbitraryValue::arbitrary(u)?;
                    m.insert(k, v.0);
                }
                Value::Object(m)
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

struct Padder<'a> {
    pads: &'a [u8],
    next: usize,
    out: String,
}

impl Padder<'_> {
    fn choice(&mut self) -> usize {
        let c = self.pads.get(self.next % self.pads.len().max(1)).copied().unwrap_or(0);
        self.next += 1;
        c as usize
    }

    fn pad(&mut self) {
        let ws = WS_TABLE[self.choice() % WS_TABLE.len()];
        self.out.push_str(ws);
    }

    fn close(&mut self, non_empty: bool, delimiter: char) {
        if non_empty && self.choice() % 2 == 1 {
            self.out.push(',');
            self.pad();
        }
        self.out.push(delimiter);
    }

    fn value(&mut self, value: &Value) {
        match value {
            Value::Array(items) => {
                self.out.push('[');
                self.pad();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                        self.pad();
                    }
                    self.value(item);
                    self.pad();
                }
                self.close(!items.is_empty(), ']');
            }
            Value::Object(members) => {
                self.out.push('{');
                self.pad();
                for (i, (k, v)) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                        self.pad();
                    }
                    write!(self.out, "\"{k}\"").unwrap();
                    self.pad();
                    self.out.push(':');
                    self.pad();
                    self.value(v);
                    self.pad();
                }
                self.close(!members.is_empty(), '}');
            }
            scalar => self.out.push_str(&serde_json::to_string(scalar).unwrap()),
        }
    }
}

fn nesting(value: &Value) -> usize {
    match value {
        Value::Array(a) => 1 + a.iter().map(nesting).max().unwrap_or(0),
        Value::Object(m) => 1 + m.values().map(nesting).max().unwrap_or(0),
        _ => 0,
    }
}

fn check(input: Input) {
    match input {
        Input::Raw(text) => {
            let _ = jsonc_lite::parse(&text);
        }
        Input::Padded { value, pads } => {
            if nesting(&value.0) > jsonc_lite::ParserOptions::DEFAULT_MAX_DEPTH {
                assert!(jsonc_lite::parse(&value.0.to_string()).is_err());
                return;
            }
            let compact = serde_json::to_string(&value.0).expect("Failed to serialize arbitrary value");
            let mut padder = Padder {
                pads: &pads,
                next: 0,
                out: String::new(),
            };
            padder.pad();
            padder.value(&value.0);
            padder.pad();

            let expected = jsonc_lite::parse(&compact).expect("compact rendering must parse");
            let actual = jsonc_lite::parse(&padder.out).expect("padded rendering must parse");
            assert_eq!(expected.to_string(), actual.to_string());
            assert_eq!(expected.to_string(), compact);
        }
    }
}

fuzz_target!(|input: Input| check(input));
