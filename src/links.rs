// src/links.rs
// Appointment URLs for a location id. Construction only; nothing is fetched.

use serde::Deserialize;
use url::Url;

use crate::config::consts::NO_APPOINTMENTS;
use crate::config::options::LinkOptions;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentLinks {
    /// JSON endpoint answering with the next open slot.
    pub next_available: Url,
    /// Booking page shown to a person.
    pub wizard: Url,
}

/// Body returned by the next-available endpoint, e.g. `{"next": "..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NextAvailable {
    #[serde(default)]
    pub next: Option<String>,
}

impl NextAvailable {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// An open slot is reported as any `next` value other than the
    /// "no appointments" sentinel.
    pub fn is_available(&self) -> bool {
        self.next.as_deref().is_some_and(|n| n != NO_APPOINTMENTS)
    }
}

pub fn next_available_date(opts: &LinkOptions, location_id: i64) -> Result<Url> {
    let mut url = Url::parse(&opts.base_url)?
        .join("CustomerCreateAppointments/GetNextAvailableDate")?;
    url.query_pairs_mut()
        .append_pair("appointmentTypeId", &opts.appointment_type.to_string())
        .append_pair("locationId", &location_id.to_string());
    Ok(url)
}

pub fn appointment_wizard(opts: &LinkOptions, location_id: i64) -> Result<Url> {
    let path = format!("AppointmentWizard/{}/{}", opts.appointment_type, location_id);
    Ok(Url::parse(&opts.base_url)?.join(&path)?)
}

pub fn for_location(opts: &LinkOptions, location_id: i64) -> Result<AppointmentLinks> {
    Ok(AppointmentLinks {
        next_available: next_available_date(opts, location_id)?,
        wizard: appointment_wizard(opts, location_id)?,
    })
}
