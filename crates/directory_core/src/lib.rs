//! Core of the company directory viewer: turning the raw `companies.json`
//! payload into [`Company`] records, deciding which of them are visible for a
//! [`FilterState`], and projecting that visible set onto a map widget and a
//! card list.

pub mod error;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod options;
pub mod view;

pub use error::{CompanyShapeError, DomMissingError, ExportError, LoadError};
pub use filter::{filter_all, matches};
pub use model::{Company, FilterState, LatLng};
pub use normalizer::{normalize_dataset, normalize_with_report, sanitize, NormalizeReport};
pub use options::{derive_options, FilterOptions};
pub use view::{CardList, MapWidget, ViewSynchronizer};
