// src/specs/locations.rs
//! Parsing spec for one licensing-location entry.
//!
//! An entry renders roughly as:
//! ```text
//! Bakers Basin - License or Non Driver ID Renewal
//! 3200 Brunswick Pike
//! Lawrenceville, NJ 08648
//!
//! Next Available: ...
//! ```
//! and carries a link like `javascript:getFirstDate(186,'Bakers Basin')`.
//!
//! Only the text before the first blank line (block 1) is read as address
//! lines. Its first line is the heading and is never part of the street.

use crate::config::consts::{BLOCK_SEP, LINE_SEP, STREET_JOIN, TITLE_SEP, TOWN_SEP};
use crate::config::options::ExtractOptions;
use crate::core::split::{head, leading_int, segment};
use crate::data::Location;
use crate::error::ExtractError;
use crate::page::LocationElement;

pub fn parse_entry<E: LocationElement + ?Sized>(
    entry: &E,
    opts: &ExtractOptions,
) -> Result<Location, ExtractError> {
    let text = entry.full_text();
    let (location_street, city_zip) = split_address(&text);

    let href = entry
        .link_attr(&opts.anchor_marker)
        .ok_or_else(|| ExtractError::MissingAnchor { marker: opts.anchor_marker.clone() })?;

    Ok(Location {
        location_id: parse_location_id(&href)?,
        location_title: s(head(&text, TITLE_SEP)),
        location_street,
        location_town: s(head(city_zip, TOWN_SEP)),
        location_zip: segment(city_zip, &opts.state_marker, 1).map(s),
    })
}

/// `(street, city_zip_line)` from block 1 of the rendered text.
/// Street is every line strictly between the first and the last.
fn split_address(text: &str) -> (String, &str) {
    let block = head(text, BLOCK_SEP);
    let lines: Vec<&str> = block.split(LINE_SEP).collect();

    let street = lines
        .get(1..lines.len().saturating_sub(1))
        .map(|mid| mid.join(STREET_JOIN))
        .unwrap_or_default();
    let city_zip = lines.last().copied().unwrap_or_default();
    (street, city_zip)
}

/// `"javascript:getFirstDate(4521,'x')"` → 4521
fn parse_location_id(href: &str) -> Result<i64, ExtractError> {
    let args = segment(href, "(", 1)
        .ok_or_else(|| ExtractError::MalformedCall { href: s(href) })?;
    leading_int(head(args, ","))
        .ok_or_else(|| ExtractError::InvalidId { href: s(href) })
}

#[inline]
fn s(v: &str) -> String { v.to_string() }
