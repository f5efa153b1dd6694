use crate::color::SectorColors;
use crate::data::filter::{filtered_indices, Criteria, FilterOptions};
use crate::data::model::Company;
use crate::data::stats::{compute_stats, Stats};
use crate::error::DataLoadError;

/// Shown in place of the listing when the load fails; details go to the log.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading company data. Please check the log.";

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The single load is still outstanding.
    Loading,
    /// Companies are loaded; filtering is live.
    Ready,
    /// The load failed; holds the user-facing message.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Full collection. Set once, never mutated afterwards.
    companies: Vec<Company>,

    /// Distinct sectors / countries for the selection controls.
    pub options: FilterOptions,

    /// Current name / sector / location query.
    pub criteria: Criteria,

    /// Indices of companies passing the current criteria.
    pub visible_indices: Vec<usize>,

    /// Statistics over the visible companies.
    pub stats: Stats,

    pub sector_colors: SectorColors,

    pub load_state: LoadState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            options: FilterOptions::default(),
            criteria: Criteria::default(),
            visible_indices: Vec::new(),
            stats: Stats::default(),
            sector_colors: SectorColors::default(),
            load_state: LoadState::Loading,
        }
    }
}

impl AppState {
    /// Start in the loading state with pre-filled criteria.
    pub fn with_criteria(criteria: Criteria) -> Self {
        Self {
            criteria,
            ..Default::default()
        }
    }

    /// Consume the outcome of the one load. Later calls are ignored.
    pub fn apply_load_result(&mut self, result: Result<Vec<Company>, DataLoadError>) {
        if self.load_state != LoadState::Loading {
            log::warn!("Ignoring repeated load result; the collection is loaded once");
            return;
        }
        match result {
            Ok(companies) => self.set_companies(companies),
            Err(e) => {
                log::error!("Error loading company data: {e}");
                self.load_state = LoadState::Failed(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Ingest the loaded collection, build filter options, run the first query.
    fn set_companies(&mut self, companies: Vec<Company>) {
        self.options = FilterOptions::from_companies(&companies);
        self.sector_colors = SectorColors::new(&self.options.sectors);
        self.companies = companies;
        self.load_state = LoadState::Ready;
        self.refilter();
    }

    /// Re-run filter and statistics after a criteria change.
    pub fn refilter(&mut self) {
        if self.load_state != LoadState::Ready {
            return;
        }
        self.visible_indices = filtered_indices(&self.companies, &self.criteria);
        self.stats = compute_stats(self.visible());
    }

    /// Reset all criteria to "no filter".
    pub fn clear_filters(&mut self) {
        self.criteria = Criteria::default();
        self.refilter();
    }

    /// The full collection, in load order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Companies passing the current criteria, in load order.
    pub fn visible(&self) -> impl Iterator<Item = &Company> + '_ {
        self.visible_indices.iter().map(|&i| &self.companies[i])
    }
}
