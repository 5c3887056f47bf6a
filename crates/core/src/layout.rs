//! The layout pipeline: colors, lanes, shading, overlap resolution.
//!
//! Runs as a single synchronous batch. Any failure aborts the whole
//! timeline; there is no partial output.

use crate::color::{CategoryRegistry, PaletteExhausted};
use crate::event::{PositionedEvent, RawEvent};
use crate::{lanes, overlap};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    PaletteExhausted(#[from] PaletteExhausted),
}

/// A fully positioned, colored, annotation-ready timeline, plus the
/// vertical extent a renderer needs to display every lane.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub events: Vec<PositionedEvent>,
    pub y_min: f64,
    pub y_max: f64,
}

/// Lay out a batch of raw events.
///
/// Categories are registered in input order, each event scores
/// `category_index * valence`, scores compact into gapless signed
/// lanes, same-category events get progressively darker shades, and
/// temporal collisions within a lane are nudged apart. The returned
/// event list is ordered center-out then chronologically, the order a
/// renderer should draw in.
pub fn layout(raw: Vec<RawEvent>) -> Result<Layout, LayoutError> {
    let mut registry = CategoryRegistry::new();
    let mut events = Vec::with_capacity(raw.len());
    let mut scores = Vec::with_capacity(raw.len());

    for event in raw {
        let (color, index) = registry.assign(&event.category)?;
        scores.push(index as i64 * i64::from(event.valence));
        events.push(PositionedEvent {
            event_name: event.event_name,
            start_date: event.start_date,
            end_date: event.end_date,
            category: event.category,
            valence: event.valence,
            force_annotation: event.force_annotation,
            position: 0.0,
            color,
        });
    }

    let allocation = lanes::compact(&scores);
    for (event, lane) in events.iter_mut().zip(&allocation.lanes) {
        event.position = *lane as f64;
    }

    shade_categories(&mut events, &registry);
    overlap::resolve(&mut events);

    tracing::debug!(
        "laid out {} events across {} categories",
        events.len(),
        registry.len()
    );
    Ok(Layout {
        events,
        y_min: allocation.y_min,
        y_max: allocation.y_max,
    })
}

/// Darken each event's base color by `ordinal/3 * 1/count` within its
/// category, so repeated categories read as a family of shades.
fn shade_categories(events: &mut [PositionedEvent], registry: &CategoryRegistry) {
    for category in registry.categories() {
        let count = events
            .iter()
            .filter(|event| event.category == category)
            .count();
        if count == 0 {
            continue;
        }
        let mut ordinal = 0usize;
        for event in events
            .iter_mut()
            .filter(|event| event.category == category)
        {
            let factor = ordinal as f64 / 3.0 / count as f64;
            event.color = event.color.darken(factor);
            ordinal += 1;
        }
    }
}
