// src/scrape.rs
use tracing::{debug, info, warn};

use crate::{
    config::options::{ExtractOptions, FailurePolicy},
    data::LocationMap,
    error::{Error, ExtractError, Result},
    page::{LocationElement, Page},
    specs::locations::parse_entry,
};

/// An entry dropped under `FailurePolicy::Skip`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the entry on the page, 0-based.
    pub index: usize,
    pub error: ExtractError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub locations: LocationMap,
    pub skipped: Vec<Skipped>,
}

/// Parse every entry into one fresh map.
/// Under `FailurePolicy::Abort` the first bad entry fails the whole run.
pub fn collect_locations<I>(entries: I, opts: &ExtractOptions) -> Result<Extraction>
where
    I: IntoIterator,
    I::Item: LocationElement,
{
    let mut out = Extraction::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match parse_entry(&entry, opts) {
            Ok(loc) => {
                debug!(index, id = loc.location_id, title = %loc.location_title, "parsed entry");
                if let Some(prev) = out.locations.insert(loc) {
                    debug!(id = prev.location_id, "duplicate id; later entry wins");
                }
            }
            Err(source) => match opts.policy {
                FailurePolicy::Abort => return Err(Error::Extract { index, source }),
                FailurePolicy::Skip => {
                    warn!(index, error = %source, "skipping entry");
                    out.skipped.push(Skipped { index, error: source });
                }
            },
        }
    }

    info!(
        locations = out.locations.len(),
        skipped = out.skipped.len(),
        "extraction finished"
    );
    Ok(out)
}

/// Parse a saved page and collect every entry matched by `opts.selector`.
pub fn extract_page(html: &str, opts: &ExtractOptions) -> Result<Extraction> {
    let page = Page::parse(html);
    let entries = page.entries(&opts.selector)?;
    if entries.is_empty() {
        info!(selector = %opts.selector, "no entries matched");
    }
    collect_locations(entries, opts)
}
