use serde::{Deserialize, Serialize};

use crate::normalizer::sanitize;

/// Точка на карте (широта, долгота). В JSON — пара `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lon]
    }
}

/// One directory entry, immutable after normalization.
///
/// The normalizer only emits valid companies, but the fields are public, so
/// [`Company::is_valid`] is checked again wherever a visible set is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    /// Первая локация — "основная".
    pub locations: Vec<String>,
    pub coordinates: LatLng,
    pub website: String,
    pub linked_in: String,
    pub work_field: Vec<String>,
}

impl Company {
    /// Non-empty name, at least one non-empty location, finite coordinates.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.locations.is_empty()
            && self.locations.iter().all(|l| !l.is_empty())
            && self.coordinates.lat.is_finite()
            && self.coordinates.lon.is_finite()
    }

    pub fn primary_location(&self) -> &str {
        self.locations.first().map(String::as_str).unwrap_or_default()
    }

    pub fn additional_locations(&self) -> &[String] {
        self.locations.get(1..).unwrap_or_default()
    }
}

/// The three active filter criteria.
///
/// `None` for field/location and an empty search term mean "no constraint".
/// Setters are the only way to change it; they apply the same clean-up the
/// input controls would (empty selection → no constraint, search term
/// lowercased and sanitized).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    field: Option<String>,
    location: Option<String>,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_field(&mut self, field: Option<&str>) {
        self.field = selection(field);
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.location = selection(location);
    }

    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = sanitize(&raw.to_lowercase());
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.set_field(Some(field));
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.set_location(Some(location));
        self
    }

    pub fn with_search_term(mut self, raw: &str) -> Self {
        self.set_search_term(raw);
        self
    }

    /// Сброс всех трёх критериев ("clear filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.field.is_none() && self.location.is_none() && self.search_term.is_empty()
    }
}

fn selection(v: Option<&str>) -> Option<String> {
    v.filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_no_constraint() {
        let mut st = FilterState::new().with_field("AI").with_location("Berlin");
        st.set_field(Some(""));
        st.set_location(None);
        assert_eq!(st.field(), None);
        assert_eq!(st.location(), None);
        assert!(st.is_unconstrained());
    }

    #[test]
    fn search_term_is_lowercased_and_sanitized() {
        let st = FilterState::new().with_search_term("<Robo>'Tics\"");
        assert_eq!(st.search_term(), "robotics");
    }

    #[test]
    fn whitespace_search_term_still_constrains() {
        let st = FilterState::new().with_search_term("   ");
        assert_eq!(st.search_term(), "   ");
        assert!(!st.is_unconstrained());
    }

    #[test]
    fn clear_resets_everything() {
        let mut st = FilterState::new()
            .with_field("AI")
            .with_location("Paris")
            .with_search_term("x");
        st.clear();
        assert_eq!(st, FilterState::default());
    }

    #[test]
    fn coordinates_serialize_as_pair() {
        let v = serde_json::to_value(LatLng::new(52.52, 13.405)).unwrap();
        assert_eq!(v, serde_json::json!([52.52, 13.405]));
    }
}
