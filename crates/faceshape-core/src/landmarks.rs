//! Landmark roles and their indices in the upstream face-mesh convention.
//!
//! The detector emits an ordered point list where each index has a fixed
//! anatomical meaning. Only the sixteen roles below are read; their indices
//! must follow the detector and are never renumbered here.

use crate::measurements::MeasurementError;
use crate::types::Landmark;
use serde::Serialize;

/// Point count of a full MediaPipe face mesh.
pub const FACE_MESH_LANDMARKS: usize = 468;

/// Minimum input length: highest referenced index plus one.
pub const REQUIRED_LANDMARKS: usize = max_role_index() + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LandmarkRole {
    ForeheadTop,
    ChinBottom,
    LeftJaw,
    RightJaw,
    LeftCheekbone,
    RightCheekbone,
    LeftJawBottom,
    RightJawBottom,
    LeftJawMid,
    RightJawMid,
    LeftEyeInner,
    RightEyeInner,
    LeftNostril,
    RightNostril,
    LeftEyebrow,
    RightEyebrow,
}

impl LandmarkRole {
    pub const ALL: [LandmarkRole; 16] = [
        LandmarkRole::ForeheadTop,
        LandmarkRole::ChinBottom,
        LandmarkRole::LeftJaw,
        LandmarkRole::RightJaw,
        LandmarkRole::LeftCheekbone,
        LandmarkRole::RightCheekbone,
        LandmarkRole::LeftJawBottom,
        LandmarkRole::RightJawBottom,
        LandmarkRole::LeftJawMid,
        LandmarkRole::RightJawMid,
        LandmarkRole::LeftEyeInner,
        LandmarkRole::RightEyeInner,
        LandmarkRole::LeftNostril,
        LandmarkRole::RightNostril,
        LandmarkRole::LeftEyebrow,
        LandmarkRole::RightEyebrow,
    ];

    /// Index of this role in the detector's output.
    pub const fn index(self) -> usize {
        match self {
            LandmarkRole::ForeheadTop => 10,
            LandmarkRole::ChinBottom => 152,
            LandmarkRole::LeftJaw => 132,
            LandmarkRole::RightJaw => 361,
            LandmarkRole::LeftCheekbone => 123,
            LandmarkRole::RightCheekbone => 352,
            LandmarkRole::LeftJawBottom => 58,
            LandmarkRole::RightJawBottom => 288,
            LandmarkRole::LeftJawMid => 93,
            LandmarkRole::RightJawMid => 323,
            LandmarkRole::LeftEyeInner => 362,
            LandmarkRole::RightEyeInner => 33,
            LandmarkRole::LeftNostril => 129,
            LandmarkRole::RightNostril => 358,
            LandmarkRole::LeftEyebrow => 70,
            LandmarkRole::RightEyebrow => 300,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LandmarkRole::ForeheadTop => "forehead top",
            LandmarkRole::ChinBottom => "chin bottom",
            LandmarkRole::LeftJaw => "left jaw",
            LandmarkRole::RightJaw => "right jaw",
            LandmarkRole::LeftCheekbone => "left cheekbone",
            LandmarkRole::RightCheekbone => "right cheekbone",
            LandmarkRole::LeftJawBottom => "left jaw bottom",
            LandmarkRole::RightJawBottom => "right jaw bottom",
            LandmarkRole::LeftJawMid => "left jaw mid",
            LandmarkRole::RightJawMid => "right jaw mid",
            LandmarkRole::LeftEyeInner => "left eye inner",
            LandmarkRole::RightEyeInner => "right eye inner",
            LandmarkRole::LeftNostril => "left nostril",
            LandmarkRole::RightNostril => "right nostril",
            LandmarkRole::LeftEyebrow => "left eyebrow",
            LandmarkRole::RightEyebrow => "right eyebrow",
        }
    }
}

const fn max_role_index() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < LandmarkRole::ALL.len() {
        let idx = LandmarkRole::ALL[i].index();
        if idx > max {
            max = idx;
        }
        i += 1;
    }
    max
}

/// A landmark slice that has been checked to cover every role index.
#[derive(Debug, Clone, Copy)]
pub struct LandmarkSet<'a> {
    points: &'a [Landmark],
}

impl<'a> LandmarkSet<'a> {
    pub fn new(points: &'a [Landmark]) -> Result<Self, MeasurementError> {
        if points.is_empty() {
            return Err(MeasurementError::Empty);
        }
        if points.len() < REQUIRED_LANDMARKS {
            return Err(MeasurementError::InvalidInput {
                required: REQUIRED_LANDMARKS,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn get(&self, role: LandmarkRole) -> &'a Landmark {
        // In bounds: `new` checked len >= REQUIRED_LANDMARKS.
        &self.points[role.index()]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
