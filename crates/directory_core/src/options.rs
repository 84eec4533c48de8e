use std::collections::BTreeSet;

use crate::model::Company;

/// Distinct selectable values for the field and location controls, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub fields: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

/// Built once per dataset load. De-duplication is exact and case-sensitive;
/// invalid companies contribute nothing.
pub fn derive_options(companies: &[Company]) -> FilterOptions {
    let mut opts = FilterOptions::default();
    for c in companies.iter().filter(|c| c.is_valid()) {
        opts.fields.extend(c.work_field.iter().cloned());
        opts.locations.extend(c.locations.iter().cloned());
    }
    opts
}
