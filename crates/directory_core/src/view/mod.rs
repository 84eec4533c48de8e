//! Projection of the visible set onto the map widget and the card list.

pub mod card;
pub mod widget;

pub use card::CardContent;
pub use widget::{
    Bounds, CardList, IconSpec, IconState, MapWidget, FOCUS_ZOOM, INITIAL_CENTER, INITIAL_ZOOM,
};

use crate::error::DomMissingError;
use crate::model::{Company, LatLng};

struct BoundCard<K> {
    marker: K,
    coordinates: LatLng,
}

/// Owns both views and keeps them consistent: markers, cards and counter are
/// always rebuilt together from the same visible slice.
pub struct ViewSynchronizer<M: MapWidget, L: CardList> {
    map: M,
    list: L,
    bound: Vec<BoundCard<M::Marker>>,
}

impl<M: MapWidget, L: CardList> ViewSynchronizer<M, L> {
    pub fn new(map: M, list: L) -> Self {
        Self {
            map,
            list,
            bound: Vec::new(),
        }
    }

    pub fn ensure_mounted(&self) -> Result<(), DomMissingError> {
        self.map.ensure_mounted()?;
        self.list.ensure_mounted()
    }

    /// Clear, rebuild, count, fit. Calling it twice with the same input leaves
    /// the same state behind.
    pub fn render(&mut self, visible: &[&Company]) {
        // 1) очистка
        self.map.remove_all_markers();
        self.list.clear();
        self.bound.clear();

        // 2) маркер + попап + карточка, в порядке visible
        for company in visible {
            let content = CardContent::from(*company);
            let marker = self.map.add_marker(company.coordinates);
            self.map.bind_popup(&marker, &content);
            self.list.append(&content);
            self.bound.push(BoundCard {
                marker,
                coordinates: company.coordinates,
            });
        }

        // 3) счётчик
        self.list.set_counter(visible.len());

        // 4) пустой набор — вьюпорт не трогаем
        if let Some(bounds) = Bounds::from_points(visible.iter().map(|c| c.coordinates)) {
            self.map.fit_bounds(&bounds);
        }
        tracing::debug!(visible = visible.len(), "view rendered");
    }

    /// Card click: centre on the company and open its popup.
    pub fn activate_card(&mut self, index: usize) -> bool {
        let Some(card) = self.bound.get(index) else {
            return false;
        };
        self.map.set_view(card.coordinates, FOCUS_ZOOM);
        self.map.open_popup(&card.marker);
        true
    }

    /// Card hover in/out swaps the marker icon.
    pub fn hover_card(&mut self, index: usize, entered: bool) -> bool {
        let Some(card) = self.bound.get(index) else {
            return false;
        };
        let state = if entered {
            IconState::Highlighted
        } else {
            IconState::Default
        };
        self.map.set_icon(&card.marker, IconSpec::for_state(state));
        true
    }

    pub fn card_count(&self) -> usize {
        self.bound.len()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }
}
