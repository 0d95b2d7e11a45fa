// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific parsing rules. Each spec knows *where the data lives* in one
//! page layout and *how to cut it out* of the rendered text.
//!
//! ## What lives here
//! - Pure parsing of one entry into one record (`locations::parse_entry`).
//! - The literal split rules of the layout (separators, markers).
//!
//! ## What does **not** live here
//! - Selecting entries out of the document (`page`).
//! - Accumulating records, failure policy (`scrape`).
//! - Persistence and output (`store`, `cli`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::extract_page → page::Page::entries
//!                            ↘ specs::locations::parse_entry (per entry)
//!       store::save / store::to_json (outside of specs)
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against `RawEntry` values and saved HTML fixtures.
pub mod locations;
