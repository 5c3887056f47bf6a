//! Overlap resolution: events that share a lane and a stretch of time
//! are nudged apart by 0.1-lane steps so no two render on the same line.

use crate::event::PositionedEvent;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Lane values move in exact 0.1 steps, so tenths make a reliable map key.
fn lane_key(position: f64) -> i64 {
    (position * 10.0).round() as i64
}

/// Deconflict overlapping events in place.
///
/// Events are processed center-out (by absolute lane, then start, then
/// end date) and the slice is left in that order. A nonzero lane held by
/// a still-active occupant (occupant end on or after the candidate's
/// start) pushes the candidate away from the center in 0.1 steps until
/// it finds a lane that is free or expired, so a crowded lane can never
/// spill across the neutral line into the opposite polarity. The winner
/// always overwrites the occupancy entry, so a long-running occupant can
/// be forgotten once a shorter event claims its lane; accepting that
/// occasional leftover overlap keeps the pass single-sweep.
///
/// Lane 0 is never nudged: neutral events may visually overlap.
pub fn resolve(events: &mut [PositionedEvent]) {
    events.sort_by_key(|event| {
        (
            lane_key(event.position).abs(),
            event.start_date,
            event.end_date,
        )
    });

    let mut occupied: HashMap<i64, NaiveDate> = HashMap::new();
    for event in events.iter_mut() {
        let mut key = lane_key(event.position);
        if key != 0 {
            let original = key;
            let step = key.signum();
            while occupied
                .get(&key)
                .is_some_and(|occupant_end| *occupant_end >= event.start_date)
            {
                key += step;
            }
            if key != original {
                tracing::debug!(
                    "nudged '{}' from lane {} to {}",
                    event.event_name,
                    original as f64 / 10.0,
                    key as f64 / 10.0
                );
                event.position = key as f64 / 10.0;
            }
        }
        occupied.insert(key, event.end_date);
    }
}
