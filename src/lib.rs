//! Filtering, faceting and pagination engine behind the activity history
//! screens. Everything here is a pure derivation over a `FilterState` and an
//! activity list; `HistoryView` is the stateful binding a screen holds.

pub mod chips;
pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod models;
pub mod options;
pub mod pagination;
pub mod predicate;
pub mod session;

#[cfg(test)]
mod tests;

pub use chips::{project, Color, FilterChip, Palette};
pub use config::HistoryConfig;
pub use error::{HistoryError, HistoryResult};
pub use filters::{clear_date_range, count_active, reset_all, set_date_range, toggle_facet_value};
pub use models::{Activity, ChipKind, DateRange, Facet, FilterState, Selection};
pub use options::{resolve, search, FacetOptions};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use predicate::filter;
pub use session::HistoryView;
