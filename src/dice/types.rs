use crate::{Error, Result};
use serde::Serialize;

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 20;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 100;
pub const DEFAULT_COUNT: u32 = 1;
pub const DEFAULT_SIDES: u32 = 6;

/// A validated request for `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollRequest {
    pub count: u32,
    pub sides: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollResult {
    pub rolls: Vec<u32>,
    pub total: u32,
}

impl Default for RollRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sides: DEFAULT_SIDES,
        }
    }
}

impl RollRequest {
    pub fn new(count: u32, sides: u32) -> Result<Self> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) || !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(Error::InvalidParameter);
        }
        Ok(Self { count, sides })
    }

    /// Builds a request from raw query-string pairs.
    ///
    /// Missing `count`/`sides` fall back to 1 and 6. A parameter given more
    /// than once, or whose value is not an integral number, is rejected.
    /// Other keys are ignored.
    pub fn from_query<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut counts = Vec::new();
        let mut sides = Vec::new();

        for (key, value) in pairs {
            match key {
                "count" => counts.push(value),
                "sides" => sides.push(value),
                _ => {}
            }
        }

        let count = parse_param(&counts, DEFAULT_COUNT)?;
        let sides = parse_param(&sides, DEFAULT_SIDES)?;

        Self::new(count, sides)
    }
}

fn parse_param(values: &[&str], default: u32) -> Result<u32> {
    match values {
        [] => Ok(default),
        [raw] => parse_integer(raw),
        _ => Err(Error::InvalidParameter),
    }
}

// Accepts any numeric literal with an integral value, so "3", " 3 ", "3.0",
// "3e0" and "0b11" are all 3.
fn parse_integer(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidParameter);
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let value: f64 = trimmed.parse().map_err(|_| Error::InvalidParameter)?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidParameter);
    }

    Ok(value as u32)
}

// Unsigned `0x`/`0b`/`0o` literals. `None` means the input has no such prefix.
fn parse_radix_literal(literal: &str) -> Option<Result<u32>> {
    let radix = match literal.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0b" => 2,
        "0o" => 8,
        _ => return None,
    };

    let digits = &literal[2..];
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(Err(Error::InvalidParameter));
    }

    Some(u32::from_str_radix(digits, radix).map_err(|_| Error::InvalidParameter))
}
