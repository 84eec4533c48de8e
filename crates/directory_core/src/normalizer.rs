//! Raw `companies.json` → `Vec<Company>`.
//!
//! Input shape:
//! ```text
//! { "companies": {
//!     "<name>": {
//!       "locations": [ { "<name or ['A', 'B']>": [lat, lon] }, ... ],
//!       "links": { "website": "...", "linkedin": "..." },
//!       "workFields": ["...", ...]
//!     } } }
//! ```
use serde_json::{json, Map, Value};
use std::fmt;

use crate::error::{CompanyShapeError, ExportError, LoadError};
use crate::model::{Company, LatLng};

const STRIPPED: [char; 5] = ['<', '>', '&', '"', '\''];

/// Strip markup-significant characters. Applying it twice changes nothing.
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Entry after flattening, before validation.
#[derive(Debug, Clone)]
pub struct CompanyDraft {
    pub name: String,
    pub locations: Vec<String>,
    pub coordinates: Value,
    pub website: String,
    pub linked_in: String,
    pub work_field: Vec<String>,
}

/// Why a structurally readable entry was still rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidReason {
    EmptyName,
    NoLocations,
    /// Длина массива координат (0, если это вообще не массив)
    BadCoordinates(usize),
    NonNumericCoordinate,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "empty name"),
            Self::NoLocations => write!(f, "no valid locations"),
            Self::BadCoordinates(n) => write!(f, "expected 2 coordinates, got {n}"),
            Self::NonNumericCoordinate => write!(f, "non-numeric coordinate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validity {
    Valid(Company),
    Invalid(InvalidReason),
}

/// Outcome of normalizing a whole dataset, including what was dropped and why.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub companies: Vec<Company>,
    pub dropped: Vec<(String, String)>,
}

pub fn normalize_dataset(raw: &Value) -> Result<Vec<Company>, LoadError> {
    normalize_with_report(raw).map(|r| r.companies)
}

/// Normalizes every entry of `raw["companies"]` in input order. Entries that
/// fail to parse or validate are dropped and logged; only a missing
/// `companies` object fails the whole call.
pub fn normalize_with_report(raw: &Value) -> Result<NormalizeReport, LoadError> {
    let entries = raw
        .get("companies")
        .and_then(Value::as_object)
        .ok_or_else(|| LoadError::Parse("missing `companies` object".into()))?;

    let mut report = NormalizeReport::default();
    for (name, info) in entries {
        let outcome = match draft_entry(name, info) {
            Ok(draft) => match validate(draft) {
                Validity::Valid(c) => Ok(c),
                Validity::Invalid(reason) => Err(reason.to_string()),
            },
            Err(err) => Err(err.to_string()),
        };
        match outcome {
            Ok(c) => report.companies.push(c),
            Err(reason) => {
                tracing::warn!(company = %name, reason = %reason, "dropping company");
                report.dropped.push((name.clone(), reason));
            }
        }
    }
    tracing::debug!(
        kept = report.companies.len(),
        dropped = report.dropped.len(),
        "dataset normalized"
    );
    Ok(report)
}

/// Flatten one raw entry. Any shape problem rejects the whole entry.
pub fn draft_entry(name: &str, info: &Value) -> Result<CompanyDraft, CompanyShapeError> {
    let raw_locations = info
        .get("locations")
        .and_then(Value::as_array)
        .ok_or(CompanyShapeError::Missing("locations"))?;

    let mut locations = Vec::new();
    let mut coordinates = None;
    for (i, entry) in raw_locations.iter().enumerate() {
        let (key, value) = entry
            .as_object()
            .and_then(|m| m.iter().next())
            .ok_or(CompanyShapeError::BadLocationEntry(i))?;
        locations.extend(parse_location_key(key)?);
        // координаты берём только у первой записи
        if i == 0 {
            coordinates = Some(value.clone());
        }
    }
    let coordinates = coordinates.ok_or(CompanyShapeError::Missing("locations[0]"))?;

    let links = info
        .get("links")
        .and_then(Value::as_object)
        .ok_or(CompanyShapeError::Missing("links"))?;

    let work_field = info
        .get("workFields")
        .and_then(Value::as_array)
        .ok_or(CompanyShapeError::Missing("workFields"))?
        .iter()
        .filter_map(Value::as_str)
        .map(sanitize)
        .filter(|t| !t.is_empty())
        .collect();

    Ok(CompanyDraft {
        name: sanitize(name),
        locations,
        coordinates,
        website: text_field(links, "website"),
        linked_in: text_field(links, "linkedin"),
        work_field,
    })
}

fn text_field(m: &Map<String, Value>, key: &str) -> String {
    m.get(key).and_then(Value::as_str).map(sanitize).unwrap_or_default()
}

/// A location key is either one name or a single-quoted list literal such as
/// `['Berlin', 'Munich']`. Empty and non-text members are dropped.
pub fn parse_location_key(key: &str) -> Result<Vec<String>, CompanyShapeError> {
    if !key.trim_start().starts_with('[') {
        return Ok(valid_location(key).into_iter().collect());
    }
    let members: Vec<Value> = serde_json::from_str(&key.replace('\'', "\"")).map_err(|e| {
        CompanyShapeError::BadListLiteral {
            literal: key.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(members
        .iter()
        .filter_map(Value::as_str)
        .filter_map(valid_location)
        .collect())
}

fn valid_location(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

pub fn validate(draft: CompanyDraft) -> Validity {
    if draft.name.is_empty() {
        return Validity::Invalid(InvalidReason::EmptyName);
    }
    if draft.locations.is_empty() {
        return Validity::Invalid(InvalidReason::NoLocations);
    }
    let pair = match draft.coordinates.as_array() {
        Some(a) if a.len() == 2 => a,
        Some(a) => return Validity::Invalid(InvalidReason::BadCoordinates(a.len())),
        None => return Validity::Invalid(InvalidReason::BadCoordinates(0)),
    };
    let (Some(lat), Some(lon)) = (pair[0].as_f64(), pair[1].as_f64()) else {
        return Validity::Invalid(InvalidReason::NonNumericCoordinate);
    };

    Validity::Valid(Company {
        name: draft.name,
        locations: draft.locations,
        coordinates: LatLng::new(lat, lon),
        website: draft.website,
        linked_in: draft.linked_in,
        work_field: draft.work_field,
    })
}

/// Writes companies back in the input shape. Every location gets its own
/// entry carrying the company's coordinates, so normalizing the result gives
/// the same collection back.
///
/// The output is keyed by name: two companies whose sanitized names coincide
/// (`"A&B"` and `"AB"`) cannot both be written and fail the export.
pub fn export_dataset(companies: &[Company]) -> Result<Value, ExportError> {
    let mut out = Map::new();
    for c in companies {
        if out.contains_key(&c.name) {
            return Err(ExportError::DuplicateName(c.name.clone()));
        }
        let locations: Vec<Value> = c
            .locations
            .iter()
            .map(|loc| {
                let mut m = Map::new();
                m.insert(loc.clone(), json!(c.coordinates));
                Value::Object(m)
            })
            .collect();
        out.insert(
            c.name.clone(),
            json!({
                "locations": locations,
                "links": { "website": c.website, "linkedin": c.linked_in },
                "workFields": c.work_field,
            }),
        );
    }
    Ok(json!({ "companies": out }))
}
