//! Confidence resolution: picks the winning category and calibrates how sure
//! we are of it.

use crate::measurements::{measure, FaceMeasurements, MeasurementError};
use crate::quality;
use crate::scorer;
use crate::types::{Classification, FaceShape, Landmark, ScoreMap};

pub const MIN_CONFIDENCE: f64 = 50.0;
pub const MAX_CONFIDENCE: f64 = 95.0;
const CLOSE_MARGIN: f64 = 0.1;
const NEAR_MARGIN: f64 = 0.2;
const CLOSE_DISCOUNT: f64 = 0.8;
const NEAR_DISCOUNT: f64 = 0.9;

/// (minimum winning score, base confidence), strongest first.
const CONFIDENCE_TIERS: [(f64, f64); 4] = [(1.0, 95.0), (0.8, 90.0), (0.6, 85.0), (0.4, 75.0)];
const WEAK_MATCH_CONFIDENCE: f64 = 60.0;

/// Best and runner-up categories of a score map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub best: Option<(FaceShape, f64)>,
    pub second: Option<(FaceShape, f64)>,
}

impl Ranking {
    /// Scan in enumeration order. Only a strictly greater score takes the
    /// lead, so ties go to the earlier category.
    pub fn of(scores: &ScoreMap) -> Self {
        let mut best: Option<(FaceShape, f64)> = None;
        let mut second: Option<(FaceShape, f64)> = None;

        for (shape, score) in scores.iter() {
            if score > score_of(best) {
                second = best;
                best = Some((shape, score));
            } else if score > score_of(second) {
                second = Some((shape, score));
            }
        }

        Self { best, second }
    }

    /// Best minus second-best score, 0 when nothing scored.
    pub fn margin(&self) -> f64 {
        score_of(self.best) - score_of(self.second)
    }
}

fn score_of(entry: Option<(FaceShape, f64)>) -> f64 {
    entry.map_or(0.0, |(_, score)| score)
}

/// Confidence tier for the winning score, before any discount.
pub fn base_confidence(best_score: f64) -> f64 {
    CONFIDENCE_TIERS
        .iter()
        .find(|(min_score, _)| best_score >= *min_score)
        .map_or(WEAK_MATCH_CONFIDENCE, |(_, confidence)| *confidence)
}

/// Multiplier for a winner whose lead over the runner-up is small. The close
/// discount needs an actual runner-up; the near one does not.
fn runner_up_discount(ranking: &Ranking) -> f64 {
    let diff = ranking.margin();
    if diff < CLOSE_MARGIN && ranking.second.is_some() {
        CLOSE_DISCOUNT
    } else if diff < NEAR_MARGIN {
        NEAR_DISCOUNT
    } else {
        1.0
    }
}

/// Classify one measured face.
pub fn classify(m: &FaceMeasurements) -> Classification {
    let scores = scorer::score(m);
    let quality = quality::assess(m);
    let ranking = Ranking::of(&scores);

    let Some((best, best_score)) = ranking.best else {
        tracing::debug!(quality, "no category scored");
        return Classification {
            shape: None,
            confidence: 0.0,
            scores: Some(scores),
            second_best_shape: None,
            score_diff: 0.0,
            quality: Some(round_to(quality, 2)),
        };
    };

    let score_diff = ranking.margin();
    let confidence = base_confidence(best_score) * runner_up_discount(&ranking) * quality;
    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    tracing::debug!(
        shape = %best,
        score = best_score,
        second = ?ranking.second.map(|(s, _)| s),
        score_diff,
        quality,
        confidence,
        "face shape resolved"
    );

    Classification {
        shape: Some(best),
        confidence: round_to(confidence, 1),
        scores: Some(scores),
        second_best_shape: ranking.second.map(|(shape, _)| shape),
        score_diff: round_to(score_diff, 2),
        quality: Some(round_to(quality, 2)),
    }
}

/// Measure and classify a full landmark list.
///
/// An empty list yields [`Classification::unknown`]. A list too short to
/// cover every landmark role is rejected with [`MeasurementError::InvalidInput`].
pub fn classify_landmarks(landmarks: &[Landmark]) -> Result<Classification, MeasurementError> {
    match measure(landmarks) {
        Ok(m) => Ok(classify(&m)),
        Err(MeasurementError::Empty) => {
            tracing::debug!("no landmarks; shape unknown");
            Ok(Classification::unknown())
        }
        Err(e) => {
            tracing::warn!(error = %e, "landmarks rejected");
            Err(e)
        }
    }
}

/// Rounds the stored binary value: 59.849999999999994 gives 59.8. Decimal
/// midpoints are never exact f64 values at one or more places.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
