//! Text-mode stand-ins for the map widget and the sidebar. They keep the
//! state a real widget would show and can print it.

use directory_core::view::{Bounds, CardContent, IconSpec, IconState, INITIAL_CENTER, INITIAL_ZOOM};
use directory_core::{CardList, LatLng, MapWidget};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct MarkerRecord {
    pub at: LatLng,
    pub popup: Option<CardContent>,
    pub icon: IconState,
}

#[derive(Debug, Clone)]
pub struct TextMap {
    markers: Vec<MarkerRecord>,
    center: LatLng,
    zoom: u8,
    fitted: Option<Bounds>,
    open_popup: Option<usize>,
}

impl Default for TextMap {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            fitted: None,
            open_popup: None,
        }
    }
}

impl TextMap {
    pub fn markers(&self) -> &[MarkerRecord] {
        &self.markers
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Last bounds the viewport was fitted to.
    pub fn fitted(&self) -> Option<Bounds> {
        self.fitted
    }

    /// Popup currently open, if any.
    pub fn popup(&self) -> Option<&CardContent> {
        self.open_popup
            .and_then(|i| self.markers.get(i))
            .and_then(|m| m.popup.as_ref())
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "map: {} marker(s), center {:.4},{:.4} zoom {}",
            self.markers.len(),
            self.center.lat,
            self.center.lon,
            self.zoom
        );
        if let Some(b) = self.fitted {
            let _ = write!(
                out,
                ", fit [{:.2},{:.2}]..[{:.2},{:.2}]",
                b.south_west.lat, b.south_west.lon, b.north_east.lat, b.north_east.lon
            );
        }
        if let Some(p) = self.popup() {
            let _ = write!(out, ", popup: {}", p.name);
        }
        out
    }
}

impl MapWidget for TextMap {
    type Marker = usize;

    fn add_marker(&mut self, at: LatLng) -> usize {
        self.markers.push(MarkerRecord {
            at,
            popup: None,
            icon: IconState::Default,
        });
        self.markers.len() - 1
    }

    fn remove_all_markers(&mut self) {
        self.markers.clear();
        self.open_popup = None;
    }

    fn bind_popup(&mut self, marker: &usize, content: &CardContent) {
        if let Some(m) = self.markers.get_mut(*marker) {
            m.popup = Some(content.clone());
        }
    }

    fn open_popup(&mut self, marker: &usize) {
        self.open_popup = Some(*marker);
    }

    fn set_icon(&mut self, marker: &usize, icon: &IconSpec) {
        if let Some(m) = self.markers.get_mut(*marker) {
            m.icon = icon.state();
        }
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        self.fitted = Some(*bounds);
        self.center = bounds.center();
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextList {
    cards: Vec<CardContent>,
    counter: usize,
}

impl TextList {
    pub fn cards(&self) -> &[CardContent] {
        &self.cards
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} companies\n", self.counter);
        for (i, c) in self.cards.iter().enumerate() {
            let _ = write!(out, "{:>3}. {} [{}] {}", i + 1, c.name, c.tags.join(", "), c.primary_location);
            if let Some(more) = c.more_label() {
                let _ = write!(out, " (+{more})");
            }
            let _ = writeln!(out, "  {}", c.website);
        }
        out
    }
}

impl CardList for TextList {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: &CardContent) {
        self.cards.push(card.clone());
    }

    fn set_counter(&mut self, count: usize) {
        self.counter = count;
    }
}
