use directory_core::{
    derive_options, filter_all, normalize_dataset, CardList, Company, DomMissingError,
    FilterOptions, FilterState, MapWidget, ViewSynchronizer,
};
use tracing::{error, info, warn};

use crate::source::DatasetSource;

pub const LOAD_FAILED: &str = "Failed to load companies data";
pub const INIT_FAILED: &str = "Failed to initialize application";

/// Everything the viewer knows for the session. Read through getters; only
/// [`Controller`] changes it.
#[derive(Debug, Default)]
pub struct AppState {
    companies: Vec<Company>,
    options: FilterOptions,
    filter: FilterState,
    loading: bool,
    notices: Vec<String>,
}

impl AppState {
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-visible error notices, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

/// Single owner of the application state and both views. Every filter change
/// runs one full `filter_all` → `render` cycle.
pub struct Controller<M: MapWidget, L: CardList> {
    state: AppState,
    view: ViewSynchronizer<M, L>,
}

impl<M: MapWidget, L: CardList> Controller<M, L> {
    pub fn new(map: M, list: L) -> Self {
        Self {
            state: AppState::default(),
            view: ViewSynchronizer::new(map, list),
        }
    }

    /// Startup: check the views, fetch once, normalize, derive options, render.
    ///
    /// Missing views abort before anything is fetched. A failed fetch or a
    /// malformed dataset leaves an empty but consistent view and a notice.
    pub async fn init<S>(&mut self, source: &S) -> Result<(), DomMissingError>
    where
        S: DatasetSource + ?Sized,
    {
        if let Err(err) = self.view.ensure_mounted() {
            error!(error = %err, "initialization aborted");
            self.state.notices.push(INIT_FAILED.to_string());
            return Err(err);
        }

        self.state.loading = true;
        let loaded = source
            .fetch()
            .await
            .and_then(|raw| normalize_dataset(&raw));
        self.state.loading = false;

        self.state.companies = match loaded {
            Ok(companies) => {
                info!(source = %source.describe(), count = companies.len(), "companies loaded");
                companies
            }
            Err(err) => {
                warn!(source = %source.describe(), error = %err, "error loading companies");
                self.state.notices.push(LOAD_FAILED.to_string());
                Vec::new()
            }
        };
        self.state.options = derive_options(&self.state.companies);
        self.refresh();
        Ok(())
    }

    pub fn set_field(&mut self, field: Option<&str>) -> usize {
        self.state.filter.set_field(field);
        self.refresh()
    }

    pub fn set_location(&mut self, location: Option<&str>) -> usize {
        self.state.filter.set_location(location);
        self.refresh()
    }

    pub fn set_search(&mut self, term: &str) -> usize {
        self.state.filter.set_search_term(term);
        self.refresh()
    }

    /// Tag click in a card or popup selects that work field.
    pub fn tag_clicked(&mut self, tag: &str) -> usize {
        self.set_field(Some(tag))
    }

    pub fn clear_filters(&mut self) -> usize {
        self.state.filter.clear();
        self.refresh()
    }

    pub fn activate_card(&mut self, index: usize) -> bool {
        self.view.activate_card(index)
    }

    pub fn hover_card(&mut self, index: usize, entered: bool) -> bool {
        self.view.hover_card(index, entered)
    }

    /// Recompute the visible set and redraw. Returns its size.
    pub fn refresh(&mut self) -> usize {
        let visible = filter_all(&self.state.companies, &self.state.filter);
        self.view.render(&visible);
        visible.len()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &ViewSynchronizer<M, L> {
        &self.view
    }
}
