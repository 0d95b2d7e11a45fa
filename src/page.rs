// src/page.rs
// Input side: a saved, rendered locations page split into entries.
//
// The parser in `specs::locations` only needs two things from an entry, so
// those are the `LocationElement` trait. `PageEntry` backs it with a DOM
// element; `RawEntry` with plain values.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::rendered_text;
use crate::error::{Error, Result};

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("invalid selector: a[href]"));

pub trait LocationElement {
    /// The entry's full rendered text.
    fn full_text(&self) -> String;

    /// `href` of the first descendant link whose `href` contains `needle`.
    fn link_attr(&self, needle: &str) -> Option<String>;
}

impl<T: LocationElement + ?Sized> LocationElement for &T {
    fn full_text(&self) -> String { (**self).full_text() }
    fn link_attr(&self, needle: &str) -> Option<String> { (**self).link_attr(needle) }
}

pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html) }
    }

    /// Elements matching `selector`, in document order.
    pub fn entries(&self, selector: &str) -> Result<Vec<PageEntry<'_>>> {
        let sel = Selector::parse(selector).map_err(|e| Error::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.doc.select(&sel).map(|el| PageEntry { el }).collect())
    }
}

#[derive(Clone, Copy)]
pub struct PageEntry<'a> {
    el: ElementRef<'a>,
}

impl LocationElement for PageEntry<'_> {
    fn full_text(&self) -> String {
        rendered_text(self.el)
    }

    fn link_attr(&self, needle: &str) -> Option<String> {
        self.el
            .select(&LINK_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.contains(needle))
            .map(str::to_string)
    }
}

/// An entry that was never HTML: already-rendered text plus the link, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub text: String,
    pub href: Option<String>,
}

impl RawEntry {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self { text: text.into(), href: Some(href.into()) }
    }

    pub fn without_link(text: impl Into<String>) -> Self {
        Self { text: text.into(), href: None }
    }
}

impl LocationElement for RawEntry {
    fn full_text(&self) -> String { self.text.clone() }

    fn link_attr(&self, needle: &str) -> Option<String> {
        self.href.as_ref().filter(|h| h.contains(needle)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <div id="locationsDiv">
            <div class="text-capitalize row">
              <span>One - Renewal</span>
              <a href="javascript:showMap()">Map</a>
              <a href="javascript:getFirstDate(1,'One')">Next</a>
            </div>
            <div class="text-uppercase">Not an entry</div>
            <section><div class="text-capitalize">Nested, not a direct child</div></section>
            <div class="text-capitalize"><span>Two</span></div>
          </div>
          <div class="text-capitalize">Outside the container</div>
        </body></html>
    "#;

    #[test]
    fn selects_direct_children_only() {
        let page = Page::parse(DOC);
        let entries = page.entries("#locationsDiv > .text-capitalize").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].full_text(), "Two");
    }

    #[test]
    fn link_attr_picks_matching_anchor() {
        let page = Page::parse(DOC);
        let entries = page.entries("#locationsDiv > .text-capitalize").unwrap();
        assert_eq!(
            entries[0].link_attr("getFirstDate").as_deref(),
            Some("javascript:getFirstDate(1,'One')")
        );
        assert_eq!(entries[1].link_attr("getFirstDate"), None);
    }

    #[test]
    fn bad_selector_is_an_error() {
        let page = Page::parse(DOC);
        let err = page.entries("#locationsDiv >").err().unwrap();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[test]
    fn no_container_means_no_entries() {
        let page = Page::parse("<html><body><p>Nothing here</p></body></html>");
        assert!(page.entries("#locationsDiv > .text-capitalize").unwrap().is_empty());
    }

    #[test]
    fn raw_entry_link_must_contain_needle() {
        let e = RawEntry::new("x", "javascript:showMap()");
        assert_eq!(e.link_attr("getFirstDate"), None);
        assert_eq!(RawEntry::without_link("x").link_attr("getFirstDate"), None);
    }
}
