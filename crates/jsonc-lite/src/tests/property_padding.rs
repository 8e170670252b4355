use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Write;

use quickcheck::QuickCheck;

use crate::{Value, parse};

const PADS: [&str; 6] = ["", " ", "\n", "\t", "\r\n    ", " \n\t "];

/// Renders `value` with padding between tokens and optional trailing commas,
/// both chosen by cycling through `choices`.
struct Padded<'a> {
    choices: &'a [u8],
    next: usize,
    out: String,
}

impl Padded<'_> {
    fn choice(&mut self) -> u8 {
        if self.choices.is_empty() {
            return 0;
        }
        let c = self.choices[self.next % self.choices.len()];
        self.next += 1;
        c
    }

    fn pad(&mut self) {
        let pad = PADS[usize::from(self.choice()) % PADS.len()];
        self.out.push_str(pad);
    }

    fn trailing_comma(&mut self) {
        if self.choice() % 2 == 1 {
            self.out.push(',');
            self.pad();
        }
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
                if !items.is_empty() {
                    self.trailing_comma();
                }
                self.out.push(']');
            }
            Value::Object(map) => {
                self.out.push('{');
                self.pad();
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                        self.pad();
                    }
                    let _ = write!(self.out, "{}", Value::String(k.clone()));
                    self.pad();
                    self.out.push(':');
                    self.pad();
                    self.value(v);
                    self.pad();
                }
                if !map.is_empty() {
                    self.trailing_comma();
                }
                self.out.push('}');
            }
            scalar => {
                let _ = write!(self.out, "{scalar}");
            }
        }
    }
}

fn render_padded(value: &Value, choices: &[u8]) -> String {
    let mut r = Padded {
        choices,
        next: 0,
        out: String::new(),
    };
    r.pad();
    r.value(value);
    r.pad();
    r.out
}

/// Property: whitespace between tokens and trailing commas before closing
/// delimiters never change the parsed value.
#[test]
fn padding_and_trailing_commas_are_insignificant() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, choices: Vec<u8>) -> bool {
        let compact = value.to_string();
        let padded = render_padded(&value, &choices);
        let (Ok(a), Ok(b)) = (parse(&compact), parse(&padded)) else {
            return false;
        };
        a == value && b == value && a.to_string() == b.to_string()
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Value, Vec<u8>) -> bool);
}

#[test]
fn padded_rendering_example() {
    let value = parse(r#"{"a":[1,2],"b":{}}"#).unwrap();
    let padded = render_padded(&value, &[2, 1, 4]);
    assert_ne!(padded, value.to_string());
    assert_eq!(parse(&padded).unwrap(), value);
}
