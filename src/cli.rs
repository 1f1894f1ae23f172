//! Command-line front end: loads activities from a JSON file, applies the
//! filters given as flags and renders the resulting page as JSON.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::chips::FilterChip;
use crate::config::HistoryConfig;
use crate::error::{HistoryError, HistoryResult};
use crate::loader::load_activities;
use crate::models::{Activity, Facet, ResultSummary};
use crate::options::{self, FacetOptions};
use crate::pagination::Page;
use crate::session::HistoryView;

pub const USAGE: &str = "usage: activity-history <activities.json> \
[--from YYYY-MM-DD [--to YYYY-MM-DD]] [--assistant NAME]... [--subject NAME]... \
[--difficulty NAME]... [--page N] [--options [QUERY]] [--config FILE]";


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub activities: PathBuf,
    pub config: Option<PathBuf>,
    pub from: Option<NaiveDate>,
    /// Only accepted together with `from`
    pub to: Option<NaiveDate>,
    pub toggles: Vec<(Facet, String)>,
    pub page: Option<usize>,
    pub options_query: Option<String>,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> HistoryResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().peekable();
        let mut activities = None;
        let mut parsed = CliArgs {
            activities: PathBuf::new(),
            config: None,
            from: None,
            to: None,
            toggles: Vec::new(),
            page: None,
            options_query: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--from" => {
                    let date = parse_date(&required_value(&arg, args.next())?)?;
                    set_once(&mut parsed.from, &arg, date)?;
                }
                "--to" => {
                    let date = parse_date(&required_value(&arg, args.next())?)?;
                    set_once(&mut parsed.to, &arg, date)?;
                }
                "--assistant" | "--subject" | "--difficulty" => {
                    let facet = match arg.as_str() {
                        "--assistant" => Facet::Assistant,
                        "--subject" => Facet::Subject,
                        _ => Facet::Difficulty,
                    };
                    parsed.toggles.push((facet, required_value(&arg, args.next())?));
                }
                "--page" => {
                    let raw = required_value(&arg, args.next())?;
                    let page = raw.parse::<usize>().map_err(|_| {
                        HistoryError::InvalidArgument(format!(
                            "--page expects a number, got {}",
                            raw
                        ))
                    })?;
                    parsed.page = Some(page);
                }
                "--config" => {
                    parsed.config = Some(PathBuf::from(required_value(&arg, args.next())?));
                }
                "--options" => {
                    let query = args.next_if(|next| !next.starts_with("--")).unwrap_or_default();
                    parsed.options_query = Some(query);
                }
                flag if flag.starts_with("--") => {
                    return Err(HistoryError::InvalidArgument(format!("unknown flag {}", flag)));
                }
                path => {
                    if activities.is_some() {
                        return Err(HistoryError::InvalidArgument(format!(
                            "unexpected argument {}",
                            path
                        )));
                    }
                    activities = Some(PathBuf::from(path));
                }
            }
        }

        if parsed.to.is_some() && parsed.from.is_none() {
            return Err(HistoryError::InvalidArgument("--to needs --from".to_string()));
        }

        parsed.activities =
            activities.ok_or_else(|| HistoryError::InvalidArgument(USAGE.to_string()))?;
        Ok(parsed)
    }
}

fn set_once(slot: &mut Option<NaiveDate>, flag: &str, date: NaiveDate) -> HistoryResult<()> {
    if slot.replace(date).is_some() {
        return Err(HistoryError::InvalidArgument(format!("{} given twice", flag)));
    }
    Ok(())
}

fn required_value(flag: &str, value: Option<String>) -> HistoryResult<String> {
    value.ok_or_else(|| HistoryError::InvalidArgument(format!("{} expects a value", flag)))
}

fn parse_date(raw: &str) -> HistoryResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| HistoryError::InvalidArgument(format!("invalid date {}: {}", raw, e)))
}

/// Everything the history screen renders for one request
#[derive(Debug, Serialize)]
pub struct Report {
    pub summary: Option<ResultSummary>,
    pub chips: Vec<FilterChip>,
    pub page: Page<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FacetOptions>,
}

pub fn run(args: &CliArgs, config: HistoryConfig) -> HistoryResult<Report> {
    let activities = load_activities(&args.activities)?;
    let mut view = HistoryView::new(activities, config);

    // from then to, as two picker clicks; an earlier `to` swaps the bounds
    for date in args.from.iter().chain(args.to.iter()) {
        view.pick_date(*date);
    }
    for (facet, value) in &args.toggles {
        view.toggle(*facet, value);
    }
    if let Some(page) = args.page {
        view.go_to_page(page);
    }

    let options = args.options_query.as_deref().map(|query| {
        let all = view.options();
        let matching = |facet: Facet| -> Vec<String> {
            options::search(query, all.for_facet(facet))
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        FacetOptions {
            assistants: matching(Facet::Assistant),
            subjects: matching(Facet::Subject),
            difficulties: matching(Facet::Difficulty),
        }
    });

    let page = view.page();
    info!(
        "Rendering page {}/{} with {} activities",
        page.page_index,
        page.total_pages,
        page.items.len()
    );

    Ok(Report {
        summary: view.summary(),
        chips: view.chips(),
        page: Page {
            items: page.items.into_iter().cloned().collect(),
            page_index: page.page_index,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        },
        options,
    })
}
