//!
//! Inline arguments into a fragment, for logs and tests.
//!
//! The output is meant to be read, never executed.
//!

use std::fmt::Write;

use crate::builder::Fragment;
use crate::value::{Arg, Value};

impl Fragment {
    /// The fragment text with every placeholder replaced by its argument.
    ///
    /// Text is single-quoted with embedded quotes doubled, lists become
    /// comma-separated values and an empty list becomes `NULL`. Placeholders
    /// without a matching argument are left as `?`.
    pub fn explain(&self) -> String {
        let mut out = String::with_capacity(self.sql().len());
        let mut args = self.args().iter();

        for ch in self.sql().chars() {
            if ch != '?' {
                out.push(ch);
                continue;
            }

            match args.next() {
                Some(arg) => write_arg(&mut out, arg),
                None => out.push('?'),
            }
        }

        out
    }
}

fn write_arg(out: &mut String, arg: &Arg) {
    match arg {
        Arg::Scalar(value) => write_value(out, value),
        Arg::List(values) if values.is_empty() => out.push_str("NULL"),
        Arg::List(values) => {
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_value(out, value);
            }
        }
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        Value::Int(value) => {
            let _ = write!(out, "{}", value);
        }
        Value::Float(value) => {
            let _ = write!(out, "{}", value);
        }
        Value::Text(text) => {
            out.push('\'');
            out.push_str(&text.replace('\'', "''"));
            out.push('\'');
        }
    }
}
