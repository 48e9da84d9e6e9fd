//! Typed shapes for the two inbound JSON payloads.
//!
//! Payloads are deserialized loosely (absent fields become `None`, unknown
//! fields are ignored) and then converted into the core records. Records that
//! cannot be converted are dropped here with a log line, so the engine only
//! ever sees well-typed input.

use crate::error::{Error, Result};
use crate::{CalendarDay, CalendarItem, RegulationFeature};
use chrono::NaiveDate;
use serde::Deserialize;

/// A GeoJSON-like regulation search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegulationPayload {
    #[serde(default)]
    pub features: Vec<FeaturePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturePayload {
    /// GeoJSON allows `"properties": null`.
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    pub rule_simplified: Option<String>,
}

impl RegulationPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Regulation records that carry a rule string.
    pub fn into_features(self) -> Vec<RegulationFeature> {
        self.features
            .into_iter()
            .enumerate()
            .filter_map(|(idx, feature)| match feature.properties.and_then(|p| p.rule_simplified) {
                Some(rule_text) => Some(RegulationFeature { rule_text }),
                None => {
                    tracing::debug!(feature = idx, "feature without rule_simplified");
                    None
                }
            })
            .collect()
    }
}

/// A suspension calendar covering a range of days.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarPayload {
    #[serde(default)]
    pub days: Vec<DayPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayPayload {
    /// `YYYYMMDD`.
    pub today_id: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub details: Option<String>,
    #[serde(rename = "exceptionName")]
    pub exception_name: Option<String>,
}

impl CalendarPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Calendar days with a valid date id, in payload order.
    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
            .into_iter()
            .filter_map(|day| match day.into_calendar_day() {
                Ok(day) => Some(day),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping calendar day");
                    None
                }
            })
            .collect()
    }
}

impl DayPayload {
    fn into_calendar_day(self) -> Result<CalendarDay> {
        let id = self.today_id.ok_or(Error::MissingField { record: "calendar day", field: "today_id" })?;
        let date = parse_date_id(&id)?;
        let items = self
            .items
            .into_iter()
            .filter_map(|item| match item.into_calendar_item() {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(date = %id, error = %err, "skipping calendar item");
                    None
                }
            })
            .collect();
        Ok(CalendarDay { date, items })
    }
}

impl ItemPayload {
    fn into_calendar_item(self) -> Result<CalendarItem> {
        let kind = self.kind.ok_or(Error::MissingField { record: "calendar item", field: "type" })?;
        let status = self.status.ok_or(Error::MissingField { record: "calendar item", field: "status" })?;
        Ok(CalendarItem { kind, status, details: self.details, exception_name: self.exception_name })
    }
}

/// Parse a `YYYYMMDD` calendar id.
pub fn parse_date_id(id: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDateId { id: id.to_string() };
    if id.len() != 8 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(id, "%Y%m%d").map_err(|_| invalid())
}
