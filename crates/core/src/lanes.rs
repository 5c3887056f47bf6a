//! Lane allocation: compacts the raw `category_index * valence` scores
//! into gapless signed lane numbers, positives and negatives numbered
//! independently outward from the neutral center lane.

/// Result of compacting one batch of raw scores.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneAllocation {
    /// Compact lane per input score, in input order. Zero scores stay 0.
    pub lanes: Vec<i64>,
    /// Vertical extent: one padding lane beyond the outermost used lane
    /// on each side.
    pub y_min: f64,
    pub y_max: f64,
}

/// Assign each distinct positive score a lane 1, 2, 3, ... and each
/// distinct negative score a lane -1, -2, -3, ..., both in order of
/// first occurrence across the batch. Scores of zero keep the center
/// lane and never participate in compaction.
pub fn compact(scores: &[i64]) -> LaneAllocation {
    let mut positive: Vec<i64> = Vec::new();
    let mut negative: Vec<i64> = Vec::new();
    for &score in scores {
        if score > 0 && !positive.contains(&score) {
            positive.push(score);
        } else if score < 0 && !negative.contains(&score) {
            negative.push(score);
        }
    }

    let lanes = scores
        .iter()
        .map(|&score| {
            if score > 0 {
                lane_of(&positive, score)
            } else if score < 0 {
                -lane_of(&negative, score)
            } else {
                0
            }
        })
        .collect();

    LaneAllocation {
        lanes,
        y_min: -(negative.len() as f64 + 1.0),
        y_max: positive.len() as f64 + 1.0,
    }
}

fn lane_of(order: &[i64], score: i64) -> i64 {
    // The score was recorded during the first pass, so a miss is impossible.
    order
        .iter()
        .position(|&seen| seen == score)
        .map(|index| index as i64 + 1)
        .unwrap_or(0)
}
