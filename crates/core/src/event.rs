use crate::color::Rgb;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event '{name}': end date {end} precedes start date {start}")]
pub struct InvalidRange {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One timeline entry as it arrives from tabular input, before the
/// layout engine has assigned it a lane or a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEvent {
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: String,
    /// Signed sentiment polarity, typically +1 or -1. Zero means neutral.
    pub valence: i32,
    /// Render the annotation below the lane instead of above it.
    pub force_annotation: bool,
}

impl RawEvent {
    pub fn new(
        event_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: impl Into<String>,
        valence: i32,
        force_annotation: bool,
    ) -> Result<Self, InvalidRange> {
        let event_name = event_name.into();
        if end_date < start_date {
            return Err(InvalidRange {
                name: event_name,
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            event_name,
            start_date,
            end_date,
            category: category.into(),
            valence,
            force_annotation,
        })
    }
}

/// A fully laid-out event, ready to hand to a rendering collaborator.
///
/// `position` is an integer lane until overlap resolution, after which
/// colliding events carry a fractional offset (multiples of 0.1).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionedEvent {
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: String,
    pub valence: i32,
    pub force_annotation: bool,
    pub position: f64,
    pub color: Rgb,
}
