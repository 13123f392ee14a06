// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Identity types.

use core::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Id handed to a record appended to a collection of `len` records.
    ///
    /// This is `len + 1`, not `max + 1`: after a delete the next insert can
    /// reuse an id that is still stored.
    pub fn for_collection_len(len: usize) -> Self {
        RecordId(len as i64 + 1)
    }

    /// Parses the integer prefix of a path segment.
    ///
    /// Leading whitespace and one sign are accepted, `0x` switches to hex, and
    /// parsing stops at the first non-digit: `"12abc"` is 12, `"1.5"` is 1.
    /// Returns `None` when no digit is found or the value overflows.
    pub fn parse(segment: &str) -> Option<Self> {
        let s = segment.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, s) = if s.len() >= 2 && (s.starts_with("0x") || s.starts_with("0X")) {
            (16, &s[2..])
        } else {
            (10, s)
        };

        let end = s
            .char_indices()
            .find(|(_, c)| !c.is_digit(radix))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let digits = &s[..end];
        if digits.is_empty() {
            return None;
        }

        let magnitude = i64::from_str_radix(digits, radix).ok()?;
        Some(RecordId(if negative { -magnitude } else { magnitude }))
    }

    /// True when `value` is a JSON number numerically equal to this id.
    pub fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(v) => v == self.0,
                None => n.as_f64() == Some(self.0 as f64),
            },
            _ => false,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        Value::from(id.0)
    }
}
