use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// One client case study from the bundled dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: i64,
    pub name: String,
    /// Filename under the static images directory.
    pub image: String,
    pub short_description: String,
    pub long_description: String,
    /// Free-text industry/category label.
    pub essential_variable: String,
    pub date_projects: String,
}

impl ClientRecord {
    /// Routing key for this record. Derived on every call, never stored.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Parse `date_projects` into a calendar date.
    ///
    /// Accepts plain dates (`2023-04-12`), RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Returns `None` for anything else.
    pub fn project_date(&self) -> Option<NaiveDate> {
        parse_project_date(&self.date_projects)
    }
}

pub(crate) fn parse_project_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

/// On-disk envelope: records live under a top-level `data` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDataset {
    pub data: Vec<ClientRecord>,
}
