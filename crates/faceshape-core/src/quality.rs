//! Measurement quality heuristic.
//!
//! Landmark detectors that lose track of a face tend to produce proportions no
//! real face has. Each structural ratio outside its plausible range costs a
//! fixed penalty; the result scales classification confidence.

use crate::measurements::FaceMeasurements;

pub const QUALITY_CEILING: f64 = 1.0;
pub const QUALITY_FLOOR: f64 = 0.7;
const QUALITY_PENALTY: f64 = 0.1;

/// A proportion with the range a correctly detected face stays inside.
struct SanityCheck {
    name: &'static str,
    ratio: fn(&FaceMeasurements) -> f64,
    min: f64,
    max: f64,
}

const SANITY_CHECKS: [SanityCheck; 6] = [
    SanityCheck {
        name: "face length / face width",
        ratio: |m| m.face_length / m.face_width,
        min: 1.1,
        max: 1.9,
    },
    SanityCheck {
        name: "cheekbone width / face width",
        ratio: |m| m.cheekbone_width / m.face_width,
        min: 0.7,
        max: 1.1,
    },
    SanityCheck {
        name: "jaw width / face width",
        ratio: |m| m.jaw_width / m.face_width,
        min: 0.6,
        max: 1.1,
    },
    SanityCheck {
        name: "chin top width / jaw width",
        ratio: |m| m.chin_top_width / m.jaw_width,
        min: 0.7,
        max: 1.1,
    },
    SanityCheck {
        name: "eye distance / face width",
        ratio: |m| m.eye_distance / m.face_width,
        min: 0.2,
        max: 0.5,
    },
    SanityCheck {
        name: "nose width / face width",
        ratio: |m| m.nose_width / m.face_width,
        min: 0.1,
        max: 0.3,
    },
];

/// Quality factor in [`QUALITY_FLOOR`, `QUALITY_CEILING`] for a measurement set.
pub fn assess(m: &FaceMeasurements) -> f64 {
    let mut quality = QUALITY_CEILING;

    for check in &SANITY_CHECKS {
        let value = (check.ratio)(m);
        // NaN compares false on both sides and is not penalized.
        if value < check.min || value > check.max {
            tracing::debug!(
                check = check.name,
                value,
                min = check.min,
                max = check.max,
                "implausible proportion"
            );
            quality -= QUALITY_PENALTY;
        }
    }

    quality.clamp(QUALITY_FLOOR, QUALITY_CEILING)
}
