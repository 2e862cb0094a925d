use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Label reported when no category scored above zero.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A single detected facial point.
///
/// Coordinates may be pixels or normalized units, but every point of one face
/// must share the same space. `z` is carried through from 3D detectors and
/// ignored by every measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl From<(f64, f64)> for Landmark {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The six face-shape archetypes, in the fixed order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Oblong,
}

impl FaceShape {
    /// Every category in enumeration order. Earlier entries win ties.
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Oblong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FaceShape::Oval => "Oval",
            FaceShape::Round => "Round",
            FaceShape::Square => "Square",
            FaceShape::Heart => "Heart",
            FaceShape::Diamond => "Diamond",
            FaceShape::Oblong => "Oblong",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category scores, stored and iterated in [`FaceShape::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreMap([f64; 6]);

impl ScoreMap {
    pub fn get(&self, shape: FaceShape) -> f64 {
        self.0[shape.slot()]
    }

    pub(crate) fn set(&mut self, shape: FaceShape, score: f64) {
        self.0[shape.slot()] = score;
    }

    /// `(shape, score)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceShape, f64)> + '_ {
        FaceShape::ALL.iter().map(move |&shape| (shape, self.get(shape)))
    }
}

impl Serialize for ScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Winning category; `None` is reported as "Unknown".
    #[serde(serialize_with = "serialize_shape")]
    pub shape: Option<FaceShape>,
    /// Percentage in [50, 95] for a known shape, 0 otherwise. One decimal.
    pub confidence: f64,
    /// Absent when no measurements could be taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreMap>,
    pub second_best_shape: Option<FaceShape>,
    /// Gap between the best and second-best score. Two decimals.
    pub score_diff: f64,
    /// Measurement quality factor in [0.7, 1.0]. Two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

impl Classification {
    /// Result for input that yielded no measurements at all.
    pub fn unknown() -> Self {
        Self {
            shape: None,
            confidence: 0.0,
            scores: None,
            second_best_shape: None,
            score_diff: 0.0,
            quality: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.shape.is_none()
    }

    pub fn label(&self) -> &'static str {
        self.shape.map_or(UNKNOWN_LABEL, FaceShape::label)
    }
}

fn serialize_shape<S: Serializer>(shape: &Option<FaceShape>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(shape.map_or(UNKNOWN_LABEL, FaceShape::label))
}
