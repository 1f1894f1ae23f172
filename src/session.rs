use chrono::NaiveDate;
use log::debug;

use crate::chips::{self, FilterChip, Palette};
use crate::config::HistoryConfig;
use crate::filters;
use crate::models::{Activity, Facet, FilterState, ResultSummary};
use crate::options::{self, FacetOptions};
use crate::pagination::{self, clamp_page_index, Page};
use crate::predicate;


/// Screen-lifetime binding of the engine: holds the activity list, the
/// current filter state and page index, and swaps state on every change.
/// Any filter change sends the view back to page 1.
#[derive(Debug, Clone)]
pub struct HistoryView {
    activities: Vec<Activity>,
    options: FacetOptions,
    palette: Palette,
    config: HistoryConfig,
    state: FilterState,
    page_index: usize,
}

impl HistoryView {
    pub fn new(activities: Vec<Activity>, config: HistoryConfig) -> Self {
        let options = options::resolve(&activities);
        Self {
            activities,
            options,
            palette: config.palette(),
            config,
            state: FilterState::default(),
            page_index: 1,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    pub fn pick_date(&mut self, clicked: NaiveDate) {
        let next = filters::set_date_range(&self.state, clicked);
        self.replace_state(next);
    }

    pub fn clear_dates(&mut self) {
        let next = filters::clear_date_range(&self.state);
        self.replace_state(next);
    }

    pub fn toggle(&mut self, facet: Facet, value: &str) {
        debug!("toggling {} {:?}", facet.as_str(), value);
        let next = filters::toggle_facet_value(&self.state, facet, value);
        self.replace_state(next);
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) {
        let next = chip.removal.apply(&self.state);
        self.replace_state(next);
    }

    pub fn reset(&mut self) {
        let next = filters::reset_all(&self.state);
        self.replace_state(next);
    }

    fn replace_state(&mut self, next: FilterState) {
        if next != self.state {
            debug!("filter state changed, {} active", filters::count_active(&next));
            self.state = next;
            self.page_index = 1;
        }
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        let total = self.total_pages();
        self.page_index = clamp_page_index(page_index, total);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page_index.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page_index.saturating_sub(1));
    }

    pub fn filtered(&self) -> Vec<&Activity> {
        predicate::filter(&self.activities, &self.state)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len(), self.config.page_size)
    }

    pub fn page(&self) -> Page<&Activity> {
        pagination::paginate(&self.filtered(), self.page_index, self.config.page_size)
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        chips::project(&self.state, &self.palette)
    }

    pub fn active_count(&self) -> usize {
        filters::count_active(&self.state)
    }

    /// "N results" banner data; `None` while no filter is active
    pub fn summary(&self) -> Option<ResultSummary> {
        let active_filters = self.active_count();
        if active_filters == 0 {
            return None;
        }

        let total_items = self.filtered().len();
        let summary = ResultSummary {
            active_filters,
            total_items,
            total_pages: pagination::total_pages(total_items, self.config.page_size),
        };
        debug!(
            "{} activities match {} active filters",
            summary.total_items, summary.active_filters
        );
        Some(summary)
    }
}
