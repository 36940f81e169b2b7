//! Ledger entry types

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// Amount as stored: a number, or whatever text the row carried.
///
/// Rows written by older clients (or hand-edited files) may hold text such as
/// `"12.50"` or `""`, or `null` where a NaN was serialized. The aggregation
/// core never rejects them; see [`Amount::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    /// `null`, booleans, objects: anything that can never be a number
    Other(serde_json::Value),
}

impl Amount {
    /// Parsed numeric value, `None` when the stored value isn't a finite number
    pub fn parsed(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            Self::Number(_) => None,
            Self::Text(raw) => parse_amount(raw),
            Self::Other(_) => None,
        }
    }

    /// Value used by every total.
    ///
    /// Text is read up to the first character that can't continue a number,
    /// so legacy values like `"12abc"` or `"12,50"` count as 12. Anything
    /// without a leading number counts as zero.
    pub fn value(&self) -> f64 {
        match self {
            Self::Text(raw) => parse_amount(raw)
                .or_else(|| leading_number(raw))
                .unwrap_or(0.0),
            _ => self.parsed().unwrap_or(0.0),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Parse a user supplied amount. Surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn leading_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid regex")
    })
}

/// Longest numeric prefix after leading whitespace
fn leading_number(raw: &str) -> Option<f64> {
    leading_number_regex()
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// One expense row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Owning user ("guest" for the local store)
    #[serde(rename = "user_id", default, deserialize_with = "string_or_null")]
    pub owner_ref: String,
    /// Calendar date, `YYYY-MM-DD`
    #[serde(rename = "date", default, deserialize_with = "string_or_null")]
    pub date_key: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
}

/// `null` reads as an empty string
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Older exports used millisecond timestamps as ids
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
