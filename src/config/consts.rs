// src/config/consts.rs

// Page layout
pub const LOCATIONS_SELECTOR: &str = "#locationsDiv > .text-capitalize";
pub const ANCHOR_MARKER: &str = "getFirstDate";
pub const STATE_MARKER: &str = "NJ ";

// Text splitting
pub const BLOCK_SEP: &str = "\n\n";
pub const LINE_SEP: char = '\n';
pub const TITLE_SEP: &str = " - ";
pub const STREET_JOIN: &str = ", ";
pub const TOWN_SEP: &str = ",";

// Store
pub const DEFAULT_MAP_FILE: &str = "licensingLocations.json";

// Appointment links
pub const MVC_BASE_URL: &str = "https://telegov.njportal.com/njmvc/";
pub const APPOINTMENT_TYPE_ID: u32 = 15;
pub const NO_APPOINTMENTS: &str = "No Appointments Available";
