//! Duplicate company names in `companies.json`.
//!
//! A JSON object silently keeps the last of two equal keys, so duplicates
//! have to be caught while the `companies` object is still being read.
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Company keys in file order, repeats included.
#[derive(Debug, Default)]
pub struct CompanyKeys(pub Vec<String>);

impl<'de> Deserialize<'de> for CompanyKeys {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct KeysVisitor;

        impl<'de> Visitor<'de> for KeysVisitor {
            type Value = CompanyKeys;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by company name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CompanyKeys, A::Error> {
                let mut keys = Vec::new();
                while let Some(k) = map.next_key::<String>()? {
                    map.next_value::<IgnoredAny>()?;
                    keys.push(k);
                }
                Ok(CompanyKeys(keys))
            }
        }

        d.deserialize_map(KeysVisitor)
    }
}

#[derive(Deserialize)]
struct TopLevel {
    companies: CompanyKeys,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Exact name → how many times it occurs (only > 1).
    pub exact: BTreeMap<String, usize>,
    /// Lowercased name → distinct spellings (only when more than one).
    pub case_insensitive: BTreeMap<String, Vec<String>>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.case_insensitive.is_empty()
    }
}

pub fn find_duplicates(json: &str) -> anyhow::Result<DuplicateReport> {
    let top: TopLevel = serde_json::from_str(json)?;
    Ok(report_for(&top.companies.0))
}

pub fn report_for(keys: &[String]) -> DuplicateReport {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut spellings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for k in keys {
        *counts.entry(k).or_default() += 1;
        let v = spellings.entry(k.to_lowercase()).or_default();
        if !v.contains(k) {
            v.push(k.clone());
        }
    }
    DuplicateReport {
        exact: counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(k, n)| (k.to_string(), n))
            .collect(),
        case_insensitive: spellings.into_iter().filter(|(_, v)| v.len() > 1).collect(),
    }
}
