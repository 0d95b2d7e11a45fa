// src/lib.rs

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod links;
pub mod page;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use data::{Location, LocationMap};
pub use error::{Error, ExtractError, Result};
pub use scrape::{Extraction, collect_locations, extract_page};
