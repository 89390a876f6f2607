use crate::error::{DecodeError, Error, Result};
use crate::point::{decode_point, parse_base, Point, MAX_RADIX, MIN_RADIX};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::convert::TryFrom;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Keys {
    n: Option<Number>,
    k: Option<Number>,
}

/// Radix of a share, written either as `16` or `"16"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(Number),
    Text(String),
}

impl Base {
    pub fn radix(&self) -> std::result::Result<u32, DecodeError> {
        match self {
            Base::Number(n) => integral(n)
                .and_then(|b| u32::try_from(b).ok())
                .filter(|b| (MIN_RADIX..=MAX_RADIX).contains(b))
                .ok_or_else(|| DecodeError::UnsupportedBase(n.to_string())),
            Base::Text(s) => parse_base(s),
        }
    }
}

/// Whole-valued JSON numbers, so `3` and `3.0` read the same.
fn integral(n: &Number) -> Option<i128> {
    if let Some(v) = n.as_i64() {
        return Some(v.into());
    }
    if let Some(v) = n.as_u64() {
        return Some(v.into());
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e30)
        .map(|f| f as i128)
}

fn count(n: &Number) -> Option<u64> {
    integral(n).and_then(|v| u64::try_from(v).ok())
}

#[derive(Debug, Deserialize)]
struct Share {
    base: Option<Base>,
    value: Option<String>,
}

/// Decodes the first `keys.k` shares of a JSON document.
pub fn parse_document(text: &str) -> Result<Vec<Point>> {
    parse_labeled(text, "<input>")
}

/// Reads and decodes the shares stored in the file at `path`.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_labeled(&text, &path.display().to_string())
}

fn parse_labeled(text: &str, origin: &str) -> Result<Vec<Point>> {
    let json_err = |what: String| {
        move |source| Error::Json { origin: what, source }
    };
    let mut doc: Map<String, Value> =
        serde_json::from_str(text).map_err(json_err(origin.to_string()))?;

    let keys = doc
        .remove("keys")
        .ok_or_else(|| Error::MissingData("\"keys\" object".to_string()))?;
    let keys: Keys =
        serde_json::from_value(keys).map_err(json_err(format!("{} keys", origin)))?;
    let k = keys
        .k
        .ok_or_else(|| Error::MissingData("\"keys.k\"".to_string()))?;
    let k = count(&k).ok_or_else(|| {
        Error::MissingData(format!("\"keys.k\" as a whole point count, got {}", k))
    })?;
    if k == 0 {
        return Err(Error::NoPoints);
    }
    match keys.n.as_ref().map(|n| (n, count(n))) {
        Some((_, Some(n))) if n < k => {
            warn!("{} declares n = {} shares but needs k = {}", origin, n, k)
        }
        Some((_, Some(n))) => debug!("{} declares n = {} shares", origin, n),
        Some((n, None)) => warn!("{} declares an unusable share count n = {}", origin, n),
        None => {}
    }
    info!("reading first {} points from {}", k, origin);

    let mut points = Vec::new();
    for i in 1..=k {
        let key = i.to_string();
        let entry = doc
            .remove(&key)
            .ok_or_else(|| Error::MissingData(format!("entry \"{}\"", key)))?;
        let share: Share = serde_json::from_value(entry)
            .map_err(json_err(format!("{} entry \"{}\"", origin, key)))?;
        let base = share.base.ok_or_else(|| {
            Error::MissingData(format!("field \"base\" of entry \"{}\"", key))
        })?;
        let value = share.value.ok_or_else(|| {
            Error::MissingData(format!("field \"value\" of entry \"{}\"", key))
        })?;
        let radix = base
            .radix()
            .map_err(|source| Error::Decode { index: i, source })?;
        points.push(decode_point(i, radix, &value)?);
    }
    Ok(points)
}
