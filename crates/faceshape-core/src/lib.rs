//! faceshape-core — Face shape classification from facial landmarks.
//!
//! Measures a face from a face-mesh landmark list, scores six shape
//! archetypes with fixed ratio rules, and resolves a winner with a confidence
//! discounted for close runners-up and implausible measurements. Every call is
//! a pure function of its input.

pub mod classifier;
pub mod geometry;
pub mod landmarks;
pub mod measurements;
pub mod overlay;
pub mod quality;
pub mod scorer;
pub mod types;

pub use classifier::{classify, classify_landmarks};
pub use landmarks::{LandmarkRole, FACE_MESH_LANDMARKS, REQUIRED_LANDMARKS};
pub use measurements::{measure, FaceMeasurements, FaceRatios, MeasurementError};
pub use types::{Classification, FaceShape, Landmark, ScoreMap};
