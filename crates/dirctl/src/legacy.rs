//! Conversion from the legacy array-of-companies file to the current
//! name-keyed shape.
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCompany {
    pub name: String,
    pub location: String,
    pub coordinates: Vec<f64>,
    pub website: String,
    pub linked_in: String,
    pub work_field: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyDataset {
    pub companies: Vec<LegacyCompany>,
}

/// A later entry with the same name replaces the earlier one but keeps its
/// position.
pub fn migrate(old: LegacyDataset) -> Value {
    let mut companies = Map::new();
    for c in old.companies {
        let mut loc = Map::new();
        loc.insert(c.location, json!(c.coordinates));
        companies.insert(
            c.name,
            json!({
                "description": "",
                "locations": [Value::Object(loc)],
                "links": { "website": c.website, "linkedin": c.linked_in },
                "workFields": c.work_field,
            }),
        );
    }
    json!({ "companies": companies })
}

pub fn migrate_str(json: &str) -> anyhow::Result<Value> {
    let old: LegacyDataset = serde_json::from_str(json)?;
    Ok(migrate(old))
}
