use crate::error::DomMissingError;
use crate::model::LatLng;
use crate::view::card::CardContent;

/// Zoom used when a card is clicked.
pub const FOCUS_ZOOM: u8 = 13;
/// Viewport before the first fit (Canada).
pub const INITIAL_CENTER: LatLng = LatLng::new(56.1304, -106.3468);
pub const INITIAL_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Default,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub url: &'static str,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
}

const DEFAULT_ICON: IconSpec = IconSpec {
    url: "static/images/default-icon.png",
    size: [25, 41],
    anchor: [12, 41],
    popup_anchor: [1, -34],
    shadow_size: [41, 41],
};

const HIGHLIGHTED_ICON: IconSpec = IconSpec {
    url: "static/images/red-icon.png",
    ..DEFAULT_ICON
};

impl IconSpec {
    pub fn for_state(state: IconState) -> &'static IconSpec {
        match state {
            IconState::Default => &DEFAULT_ICON,
            IconState::Highlighted => &HIGHLIGHTED_ICON,
        }
    }

    pub fn state(&self) -> IconState {
        if self.url == HIGHLIGHTED_ICON.url {
            IconState::Highlighted
        } else {
            IconState::Default
        }
    }
}

/// Axis-aligned lat/lon box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// `None` for an empty input: there is nothing to fit.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in it {
            b.south_west.lat = b.south_west.lat.min(p.lat);
            b.south_west.lon = b.south_west.lon.min(p.lon);
            b.north_east.lat = b.north_east.lat.max(p.lat);
            b.north_east.lon = b.north_east.lon.max(p.lon);
        }
        Some(b)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&p.lon)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }
}

/// Map capability consumed by the view synchronizer (markers, popups, viewport).
pub trait MapWidget {
    /// Handle to a placed marker.
    type Marker: Clone;

    fn ensure_mounted(&self) -> Result<(), DomMissingError> {
        Ok(())
    }
    fn add_marker(&mut self, at: LatLng) -> Self::Marker;
    fn remove_all_markers(&mut self);
    fn bind_popup(&mut self, marker: &Self::Marker, content: &CardContent);
    fn open_popup(&mut self, marker: &Self::Marker);
    fn set_icon(&mut self, marker: &Self::Marker, icon: &IconSpec);
    fn fit_bounds(&mut self, bounds: &Bounds);
    fn set_view(&mut self, center: LatLng, zoom: u8);
}

/// Sidebar capability: the card list and the visible counter.
pub trait CardList {
    fn ensure_mounted(&self) -> Result<(), DomMissingError> {
        Ok(())
    }
    fn clear(&mut self);
    fn append(&mut self, card: &CardContent);
    fn set_counter(&mut self, count: usize);
}
