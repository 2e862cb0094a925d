//! Measurement extraction and ratio calculation.
//!
//! Turns a validated landmark set into named lengths, jaw and chin angles, and
//! the dimensionless ratios the shape rules read. Ratios are plain divisions;
//! no scaling or smoothing is applied, so every landmark must share one
//! coordinate space.

use crate::geometry::{angle, distance};
use crate::landmarks::{LandmarkRole, LandmarkSet};
use crate::types::Landmark;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("no landmarks supplied")]
    Empty,
    #[error("invalid input: {actual} landmarks supplied, at least {required} required")]
    InvalidInput { required: usize, actual: usize },
}

/// Dimensionless ratios derived from a [`FaceMeasurements`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRatios {
    /// Face length / face width.
    pub face_ratio: f64,
    /// Jaw width / face width.
    pub jaw_to_forehead_ratio: f64,
    pub cheekbone_to_jaw_ratio: f64,
    pub forehead_to_cheekbone_ratio: f64,
    pub chin_top_to_bottom_ratio: f64,
    pub chin_to_jaw_ratio: f64,
    pub chin_mid_to_jaw_ratio: f64,
    /// Chin angle normalized by 180°.
    pub chin_angle_ratio: f64,
    /// Sum of both jaw angles normalized by 360°.
    pub jaw_angle_ratio: f64,
    pub eye_to_face_ratio: f64,
}

/// Lengths, angles and ratios for one face. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMeasurements {
    pub face_length: f64,
    pub face_width: f64,
    pub cheekbone_width: f64,
    pub jaw_width: f64,
    pub jaw_mid_width: f64,
    pub chin_top_width: f64,
    pub chin_bottom_width: f64,
    pub chin_mid_width: f64,
    pub eye_distance: f64,
    pub nose_width: f64,
    pub forehead_width: f64,
    pub chin_angle: f64,
    pub left_jaw_angle: f64,
    pub right_jaw_angle: f64,
    /// Vertical offset of the chin tip from the midpoint of the chin sides.
    pub chin_projection: f64,
    #[serde(flatten)]
    pub ratios: FaceRatios,
}

impl FaceRatios {
    pub fn from_measurements(m: &FaceMeasurements) -> Self {
        Self {
            face_ratio: m.face_length / m.face_width,
            jaw_to_forehead_ratio: m.jaw_width / m.face_width,
            cheekbone_to_jaw_ratio: m.cheekbone_width / m.jaw_width,
            forehead_to_cheekbone_ratio: m.forehead_width / m.cheekbone_width,
            chin_top_to_bottom_ratio: m.chin_top_width / m.chin_bottom_width,
            chin_to_jaw_ratio: m.chin_top_width / m.jaw_width,
            chin_mid_to_jaw_ratio: m.chin_mid_width / m.jaw_width,
            chin_angle_ratio: m.chin_angle / 180.0,
            jaw_angle_ratio: (m.left_jaw_angle + m.right_jaw_angle) / 360.0,
            eye_to_face_ratio: m.eye_distance / m.face_width,
        }
    }
}

impl FaceMeasurements {
    /// Measure a face from a full landmark list.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, MeasurementError> {
        let set = LandmarkSet::new(landmarks)?;
        Ok(Self::from_set(&set))
    }

    pub fn from_set(set: &LandmarkSet<'_>) -> Self {
        use LandmarkRole::*;

        let span = |a: LandmarkRole, b: LandmarkRole| distance(set.get(a), set.get(b));

        // The chin sides are the same points as the face width pair, and the
        // chin bottom corners are the jaw bottom pair.
        let chin_tip = set.get(ChinBottom);
        let chin_left = set.get(LeftJaw);
        let chin_right = set.get(RightJaw);

        let mut m = Self {
            face_length: span(ForeheadTop, ChinBottom),
            face_width: span(LeftJaw, RightJaw),
            cheekbone_width: span(LeftCheekbone, RightCheekbone),
            jaw_width: span(LeftJawBottom, RightJawBottom),
            jaw_mid_width: span(LeftJawMid, RightJawMid),
            chin_top_width: span(LeftJaw, RightJaw),
            chin_bottom_width: span(LeftJawBottom, RightJawBottom),
            chin_mid_width: span(LeftJawMid, RightJawMid),
            eye_distance: span(LeftEyeInner, RightEyeInner),
            nose_width: span(LeftNostril, RightNostril),
            forehead_width: span(LeftEyebrow, RightEyebrow),
            chin_angle: angle(chin_left, chin_tip, chin_right),
            left_jaw_angle: angle(set.get(LeftJaw), set.get(LeftJawBottom), chin_tip),
            right_jaw_angle: angle(set.get(RightJaw), set.get(RightJawBottom), chin_tip),
            chin_projection: (chin_tip.y - (chin_left.y + chin_right.y) / 2.0).abs(),
            ratios: FaceRatios::default(),
        };
        m.ratios = FaceRatios::from_measurements(&m);
        m
    }
}

/// Measure a face from a full landmark list.
///
/// Fails with [`MeasurementError::Empty`] for an empty list and
/// [`MeasurementError::InvalidInput`] when any role index is out of range.
pub fn measure(landmarks: &[Landmark]) -> Result<FaceMeasurements, MeasurementError> {
    FaceMeasurements::from_landmarks(landmarks)
}
