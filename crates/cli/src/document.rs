// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share documents.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key except `keys` is the x coordinate of a share whose y is `value`
//! written in `base`. Shares keep the order they appear in the document.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use sf_polynomial::{decode, Point};
use tracing::warn;

const KEYS: &str = "keys";

#[derive(Debug, Clone, PartialEq)]
pub struct ShareDocument {
    /// Total shares issued. Informational only.
    pub n: usize,
    /// Shares required to reconstruct.
    pub k: usize,
    pub points: Vec<Point>,
}

pub fn load_document(path: &Path) -> Result<ShareDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read share document {}", path.display()))?;
    parse_document(&text).with_context(|| format!("Invalid share document {}", path.display()))
}

pub fn parse_document(text: &str) -> Result<ShareDocument> {
    let root: Map<String, Value> = serde_json::from_str(text).context("Malformed JSON")?;

    let keys = root
        .get(KEYS)
        .ok_or_else(|| anyhow!("Missing `{KEYS}` entry"))?;
    let n = count_field(keys, "n").context("Invalid `keys.n`")?;
    let k = count_field(keys, "k").context("Invalid `keys.k`")?;
    if k == 0 {
        bail!("`keys.k` must be at least 1");
    }

    let points = root
        .iter()
        .filter(|(key, _)| key.as_str() != KEYS)
        .map(|(key, entry)| parse_share(key, entry).with_context(|| format!("Invalid share `{key}`")))
        .collect::<Result<Vec<_>>>()?;

    if points.len() != n {
        warn!(n, found = points.len(), "Share count differs from `keys.n`");
    }

    Ok(ShareDocument { n, k, points })
}

fn parse_share(key: &str, entry: &Value) -> Result<Point> {
    let x: i64 = key
        .trim()
        .parse()
        .with_context(|| format!("`{key}` is not an integer x coordinate"))?;

    let base = integer_field(entry, "base")?;
    let base = u32::try_from(base).map_err(|_| anyhow!("Base {base} is out of range"))?;
    let value = entry
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("Missing string field `value`"))?;

    let y = decode(value, base)?;
    Ok(Point::new(x, y))
}

fn count_field(object: &Value, field: &str) -> Result<usize> {
    let value = integer_field(object, field)?;
    usize::try_from(value).with_context(|| format!("`{field}` = {value} does not fit in usize"))
}

/// Reads a non-negative integer stored either as a JSON number or a decimal string.
fn integer_field(object: &Value, field: &str) -> Result<u64> {
    match object.get(field) {
        Some(Value::Number(number)) => number
            .as_u64()
            .ok_or_else(|| anyhow!("`{field}` must be a non-negative integer, got {number}")),
        Some(Value::String(text)) => text
            .trim()
            .parse()
            .with_context(|| format!("`{field}` must be a non-negative integer, got {text:?}")),
        Some(other) => bail!("`{field}` must be an integer, got {other}"),
        None => bail!("Missing field `{field}`"),
    }
}
