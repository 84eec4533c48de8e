use crate::model::{Company, LatLng};

/// What a popup and a sidebar card show for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub name: String,
    pub website: String,
    pub linked_in: Option<String>,
    pub tags: Vec<String>,
    pub primary_location: String,
    pub additional_locations: Vec<String>,
    pub coordinates: LatLng,
}

impl CardContent {
    /// "3 more" under the primary location, if there are extra locations.
    pub fn more_label(&self) -> Option<String> {
        match self.additional_locations.len() {
            0 => None,
            n => Some(format!("{n} more")),
        }
    }
}

impl From<&Company> for CardContent {
    fn from(c: &Company) -> Self {
        Self {
            name: c.name.clone(),
            website: c.website.clone(),
            linked_in: (!c.linked_in.is_empty()).then(|| c.linked_in.clone()),
            tags: c.work_field.clone(),
            primary_location: c.primary_location().to_string(),
            additional_locations: c.additional_locations().to_vec(),
            coordinates: c.coordinates,
        }
    }
}
