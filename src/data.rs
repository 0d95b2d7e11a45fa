// src/data.rs
//
// Canonical location data.
//
// - Location:    one parsed licensing location.
// - LocationMap: every location from one page, keyed by `location_id`.
//                Serializes as a JSON object keyed by the decimal id, which is
//                the shape of `licensingLocations.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "locationID")]
    pub location_id: i64,
    pub location_title: String,
    pub location_street: String,
    pub location_town: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_zip: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationMap(BTreeMap<i64, Location>);

impl LocationMap {
    pub fn new() -> Self { Self::default() }

    /// Insert under the record's own id. Returns the record it replaced, if any.
    pub fn insert(&mut self, loc: Location) -> Option<Location> {
        self.0.insert(loc.location_id, loc)
    }

    pub fn get(&self, id: i64) -> Option<&Location> { self.0.get(&id) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &Location> { self.0.values() }
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ { self.0.keys().copied() }
}

impl FromIterator<Location> for LocationMap {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut map = Self::new();
        for loc in iter { map.insert(loc); }
        map
    }
}
