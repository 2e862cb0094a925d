//! Rule-based shape scoring.
//!
//! Each category has an independent rule reading only the ratio set (and the
//! chin projection for Oblong). A rule awards a primary bonus when all its
//! defining ratios sit in a tight band, a smaller one when they sit in a
//! looser band, then small additive bonuses for auxiliary indicators. Several
//! categories can score at once; the resolver picks the winner.
//!
//! The band edges are fixed constants. Recommendations and advice keyed on the
//! resulting labels depend on them staying exactly as they are.

use crate::measurements::FaceMeasurements;
use crate::types::{FaceShape, ScoreMap};

const PRIMARY_BONUS: f64 = 0.9;
const SECONDARY_BONUS: f64 = 0.6;

/// Inclusive on both ends.
fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

pub fn oval(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if within(r.face_ratio, 1.3, 1.5)
        && within(r.jaw_to_forehead_ratio, 0.8, 1.0)
        && within(r.cheekbone_to_jaw_ratio, 0.9, 1.1)
    {
        score += PRIMARY_BONUS;
    } else if within(r.face_ratio, 1.25, 1.55) {
        score += SECONDARY_BONUS;
    }
    if (r.forehead_to_cheekbone_ratio - 1.0).abs() < 0.1 {
        score += 0.1;
    }
    score
}

pub fn round(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if within(r.face_ratio, 0.9, 1.1)
        && within(r.jaw_to_forehead_ratio, 0.9, 1.1)
        && within(r.cheekbone_to_jaw_ratio, 0.9, 1.1)
    {
        score += PRIMARY_BONUS;
    } else if r.face_ratio > 0.8 && r.face_ratio < 1.2 && within(r.jaw_to_forehead_ratio, 0.8, 1.2) {
        score += SECONDARY_BONUS;
    }
    // soft chin
    if r.chin_angle_ratio > 0.6 {
        score += 0.2;
    }
    // soft jaw
    if r.jaw_angle_ratio > 0.6 {
        score += 0.2;
    }
    score
}

pub fn square(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if within(r.face_ratio, 0.9, 1.1)
        && within(r.jaw_to_forehead_ratio, 1.0, 1.2)
        && within(r.cheekbone_to_jaw_ratio, 0.9, 1.1)
    {
        score += PRIMARY_BONUS;
    } else if r.face_ratio > 0.8 && r.face_ratio < 1.2 && within(r.jaw_to_forehead_ratio, 0.9, 1.3) {
        score += SECONDARY_BONUS;
    }
    // sharp jaw
    if r.jaw_angle_ratio < 0.4 {
        score += 0.2;
    }
    // chin barely tapers
    if r.chin_top_to_bottom_ratio >= 0.9 {
        score += 0.1;
    }
    score
}

pub fn heart(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if within(r.forehead_to_cheekbone_ratio, 1.1, 1.3)
        && within(r.jaw_to_forehead_ratio, 0.7, 0.9)
        && r.chin_angle_ratio < 0.5
    {
        score += PRIMARY_BONUS;
    } else if within(r.forehead_to_cheekbone_ratio, 1.05, 1.4) && within(r.jaw_to_forehead_ratio, 0.6, 1.0) {
        score += SECONDARY_BONUS;
    }
    if r.jaw_to_forehead_ratio < 0.7 {
        score += 0.2;
    }
    // pointed chin
    if r.chin_angle_ratio < 0.3 {
        score += 0.2;
    }
    score
}

pub fn diamond(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if within(r.forehead_to_cheekbone_ratio, 0.7, 0.9)
        && within(r.cheekbone_to_jaw_ratio, 1.1, 1.3)
        && r.chin_angle_ratio < 0.5
    {
        score += PRIMARY_BONUS;
    } else if within(r.forehead_to_cheekbone_ratio, 0.6, 1.0) && within(r.cheekbone_to_jaw_ratio, 1.05, 1.4) {
        score += SECONDARY_BONUS;
    }
    if r.eye_to_face_ratio < 0.25 {
        score += 0.1;
    }
    score
}

pub fn oblong(m: &FaceMeasurements) -> f64 {
    let r = &m.ratios;
    let mut score = 0.0;

    if r.face_ratio > 1.5
        && r.face_ratio <= 1.8
        && within(r.jaw_to_forehead_ratio, 0.8, 1.0)
        && within(r.cheekbone_to_jaw_ratio, 0.9, 1.1)
    {
        score += PRIMARY_BONUS;
    } else if r.face_ratio > 1.4 && r.face_ratio <= 1.9 {
        score += SECONDARY_BONUS;
    }
    // prominent chin
    if m.chin_projection > 10.0 {
        score += 0.1;
    }
    score
}

impl FaceShape {
    /// The scoring rule for this category.
    pub fn rule(self) -> fn(&FaceMeasurements) -> f64 {
        match self {
            FaceShape::Oval => oval,
            FaceShape::Round => round,
            FaceShape::Square => square,
            FaceShape::Heart => heart,
            FaceShape::Diamond => diamond,
            FaceShape::Oblong => oblong,
        }
    }
}

/// Score every category.
pub fn score(m: &FaceMeasurements) -> ScoreMap {
    let mut scores = ScoreMap::default();
    for shape in FaceShape::ALL {
        scores.set(shape, shape.rule()(m));
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::FaceRatios;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    /// Ratios that trigger no rule at all.
    fn neutral() -> FaceRatios {
        FaceRatios {
            face_ratio: 2.5,
            jaw_to_forehead_ratio: 0.75,
            cheekbone_to_jaw_ratio: 1.6,
            forehead_to_cheekbone_ratio: 1.6,
            chin_top_to_bottom_ratio: 0.5,
            chin_to_jaw_ratio: 0.5,
            chin_mid_to_jaw_ratio: 0.5,
            chin_angle_ratio: 0.55,
            jaw_angle_ratio: 0.5,
            eye_to_face_ratio: 0.3,
        }
    }

    fn with(ratios: FaceRatios, chin_projection: f64) -> FaceMeasurements {
        FaceMeasurements {
            face_length: 280.0,
            face_width: 200.0,
            cheekbone_width: 190.0,
            jaw_width: 190.0,
            jaw_mid_width: 196.0,
            chin_top_width: 200.0,
            chin_bottom_width: 190.0,
            chin_mid_width: 196.0,
            eye_distance: 60.0,
            nose_width: 40.0,
            forehead_width: 190.0,
            chin_angle: ratios.chin_angle_ratio * 180.0,
            left_jaw_angle: ratios.jaw_angle_ratio * 180.0,
            right_jaw_angle: ratios.jaw_angle_ratio * 180.0,
            chin_projection,
            ratios,
        }
    }

    #[test]
    fn test_neutral_scores_nothing() {
        let scores = score(&with(neutral(), 5.0));
        for (shape, value) in scores.iter() {
            assert_eq!(value, 0.0, "{shape} scored");
        }
    }

    #[test]
    fn test_clean_oval() {
        let r = FaceRatios {
            face_ratio: 1.40,
            jaw_to_forehead_ratio: 0.90,
            cheekbone_to_jaw_ratio: 1.00,
            forehead_to_cheekbone_ratio: 1.00,
            chin_angle_ratio: 0.5,
            jaw_angle_ratio: 0.5,
            chin_top_to_bottom_ratio: 0.9,
            eye_to_face_ratio: 0.3,
            ..neutral()
        };
        assert_abs_diff_eq!(oval(&with(r, 5.0)), 1.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.30, 0.9)]
    #[case(1.50, 0.9)]
    #[case(1.27, 0.6)]
    #[case(1.55, 0.6)]
    #[case(1.56, 0.0)]
    #[case(1.20, 0.0)]
    fn test_oval_face_ratio_bands(#[case] face_ratio: f64, #[case] expected: f64) {
        let r = FaceRatios {
            face_ratio,
            jaw_to_forehead_ratio: 0.9,
            cheekbone_to_jaw_ratio: 1.0,
            ..neutral()
        };
        assert_abs_diff_eq!(oval(&with(r, 5.0)), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.0, 1.0, 1.0, 0.9)]
    #[case(1.15, 1.0, 1.0, 0.6)]
    #[case(1.2, 1.0, 1.0, 0.0)] // exclusive upper edge on the loose band
    #[case(0.8, 1.0, 1.0, 0.0)] // exclusive lower edge on the loose band
    #[case(1.0, 1.2, 1.3, 0.6)]
    #[case(1.0, 1.25, 1.0, 0.0)]
    fn test_round_bands(
        #[case] face_ratio: f64,
        #[case] jaw_to_forehead_ratio: f64,
        #[case] cheekbone_to_jaw_ratio: f64,
        #[case] expected: f64,
    ) {
        let r = FaceRatios {
            face_ratio,
            jaw_to_forehead_ratio,
            cheekbone_to_jaw_ratio,
            ..neutral()
        };
        assert_abs_diff_eq!(round(&with(r, 5.0)), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_round_soft_features() {
        let r = FaceRatios {
            face_ratio: 1.0,
            jaw_to_forehead_ratio: 1.0,
            cheekbone_to_jaw_ratio: 1.0,
            chin_angle_ratio: 0.7,
            jaw_angle_ratio: 0.7,
            ..neutral()
        };
        assert_abs_diff_eq!(round(&with(r, 5.0)), 1.3, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.0, 1.1, 0.5, 0.5, 0.9)]
    #[case(1.0, 1.1, 0.3, 0.5, 1.1)]
    #[case(1.0, 1.1, 0.3, 0.95, 1.2)]
    #[case(1.0, 1.3, 0.5, 0.5, 0.6)]
    #[case(1.0, 1.35, 0.5, 0.5, 0.0)]
    fn test_square(
        #[case] face_ratio: f64,
        #[case] jaw_to_forehead_ratio: f64,
        #[case] jaw_angle_ratio: f64,
        #[case] chin_top_to_bottom_ratio: f64,
        #[case] expected: f64,
    ) {
        let r = FaceRatios {
            face_ratio,
            jaw_to_forehead_ratio,
            cheekbone_to_jaw_ratio: 1.0,
            jaw_angle_ratio,
            chin_top_to_bottom_ratio,
            ..neutral()
        };
        assert_abs_diff_eq!(square(&with(r, 5.0)), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.2, 0.8, 0.4, 0.9)]
    #[case(1.2, 0.8, 0.55, 0.6)] // blunt chin misses the tight band
    #[case(1.2, 0.65, 0.2, 1.0)] // loose band, narrow jaw, pointed chin
    #[case(1.5, 0.8, 0.4, 0.0)]
    fn test_heart(
        #[case] forehead_to_cheekbone_ratio: f64,
        #[case] jaw_to_forehead_ratio: f64,
        #[case] chin_angle_ratio: f64,
        #[case] expected: f64,
    ) {
        let r = FaceRatios {
            forehead_to_cheekbone_ratio,
            jaw_to_forehead_ratio,
            chin_angle_ratio,
            ..neutral()
        };
        assert_abs_diff_eq!(heart(&with(r, 5.0)), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.8, 1.2, 0.4, 0.3, 0.9)]
    #[case(0.8, 1.2, 0.4, 0.2, 1.0)]
    #[case(0.95, 1.35, 0.4, 0.3, 0.6)]
    #[case(0.8, 1.2, 0.6, 0.3, 0.6)]
    #[case(1.05, 1.2, 0.4, 0.3, 0.0)]
    fn test_diamond(
        #[case] forehead_to_cheekbone_ratio: f64,
        #[case] cheekbone_to_jaw_ratio: f64,
        #[case] chin_angle_ratio: f64,
        #[case] eye_to_face_ratio: f64,
        #[case] expected: f64,
    ) {
        let r = FaceRatios {
            forehead_to_cheekbone_ratio,
            cheekbone_to_jaw_ratio,
            chin_angle_ratio,
            eye_to_face_ratio,
            ..neutral()
        };
        assert_abs_diff_eq!(diamond(&with(r, 5.0)), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.5, 5.0, 0.6)] // 1.5 is exclusive for the tight band
    #[case(1.65, 5.0, 0.9)]
    #[case(1.8, 12.0, 1.0)]
    #[case(1.85, 5.0, 0.6)]
    #[case(1.4, 5.0, 0.0)]
    #[case(1.95, 12.0, 0.1)]
    fn test_oblong(#[case] face_ratio: f64, #[case] chin_projection: f64, #[case] expected: f64) {
        let r = FaceRatios {
            face_ratio,
            jaw_to_forehead_ratio: 0.9,
            cheekbone_to_jaw_ratio: 1.0,
            ..neutral()
        };
        assert_abs_diff_eq!(oblong(&with(r, chin_projection)), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_categories_score_independently() {
        // Round and Square both match a 1:1 face with a jaw as wide as the face.
        let r = FaceRatios {
            face_ratio: 1.0,
            jaw_to_forehead_ratio: 1.0,
            cheekbone_to_jaw_ratio: 1.0,
            ..neutral()
        };
        let scores = score(&with(r, 5.0));
        assert!(scores.get(FaceShape::Round) > 0.0);
        assert!(scores.get(FaceShape::Square) > 0.0);
    }
}
