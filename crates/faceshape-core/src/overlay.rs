//! Overlay descriptors for renderers.
//!
//! Renderers draw the landmark points, the measured segments and a short text
//! block describing the result. The segment table lives here so they never
//! duplicate the landmark role mapping.

use crate::landmarks::{LandmarkRole, LandmarkSet};
use crate::measurements::{FaceMeasurements, MeasurementError};
use crate::types::{Classification, Landmark};
use serde::Serialize;

/// A labelled segment between two landmark roles.
pub struct MeasurementLineSpec {
    pub label: &'static str,
    pub from: LandmarkRole,
    pub to: LandmarkRole,
    length: fn(&FaceMeasurements) -> f64,
}

/// Segments in drawing order.
pub const MEASUREMENT_LINES: [MeasurementLineSpec; 10] = [
    MeasurementLineSpec {
        label: "Face Length",
        from: LandmarkRole::ForeheadTop,
        to: LandmarkRole::ChinBottom,
        length: |m| m.face_length,
    },
    MeasurementLineSpec {
        label: "Face Width",
        from: LandmarkRole::LeftJaw,
        to: LandmarkRole::RightJaw,
        length: |m| m.face_width,
    },
    MeasurementLineSpec {
        label: "Cheekbone Width",
        from: LandmarkRole::LeftCheekbone,
        to: LandmarkRole::RightCheekbone,
        length: |m| m.cheekbone_width,
    },
    MeasurementLineSpec {
        label: "Jaw Width",
        from: LandmarkRole::LeftJawBottom,
        to: LandmarkRole::RightJawBottom,
        length: |m| m.jaw_width,
    },
    MeasurementLineSpec {
        label: "Chin Top Width",
        from: LandmarkRole::LeftJaw,
        to: LandmarkRole::RightJaw,
        length: |m| m.chin_top_width,
    },
    MeasurementLineSpec {
        label: "Chin Bottom Width",
        from: LandmarkRole::LeftJawBottom,
        to: LandmarkRole::RightJawBottom,
        length: |m| m.chin_bottom_width,
    },
    MeasurementLineSpec {
        label: "Chin Mid Width",
        from: LandmarkRole::LeftJawMid,
        to: LandmarkRole::RightJawMid,
        length: |m| m.chin_mid_width,
    },
    MeasurementLineSpec {
        label: "Eye Distance",
        from: LandmarkRole::LeftEyeInner,
        to: LandmarkRole::RightEyeInner,
        length: |m| m.eye_distance,
    },
    MeasurementLineSpec {
        label: "Nose Width",
        from: LandmarkRole::LeftNostril,
        to: LandmarkRole::RightNostril,
        length: |m| m.nose_width,
    },
    MeasurementLineSpec {
        label: "Forehead Width",
        from: LandmarkRole::LeftEyebrow,
        to: LandmarkRole::RightEyebrow,
        length: |m| m.forehead_width,
    },
];

/// A measurement segment resolved to concrete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementLine {
    pub label: &'static str,
    pub from: Landmark,
    pub to: Landmark,
    pub length: f64,
}

/// Resolve [`MEASUREMENT_LINES`] against a landmark list.
pub fn measurement_lines(
    landmarks: &[Landmark],
    m: &FaceMeasurements,
) -> Result<Vec<MeasurementLine>, MeasurementError> {
    let set = LandmarkSet::new(landmarks)?;
    Ok(MEASUREMENT_LINES
        .iter()
        .map(|spec| MeasurementLine {
            label: spec.label,
            from: *set.get(spec.from),
            to: *set.get(spec.to),
            length: (spec.length)(m),
        })
        .collect())
}

impl Classification {
    /// Text block shown alongside the overlay.
    pub fn summary_lines(&self, m: Option<&FaceMeasurements>) -> Vec<String> {
        let mut lines = vec![
            format!("Detected Face Shape: {}", self.label()),
            format!("Confidence: {}%", self.confidence),
        ];

        if let Some(quality) = self.quality {
            lines.push(format!("Measurement Quality: {:.0}%", quality * 100.0));
        }

        if let Some(second) = self.second_best_shape.filter(|s| Some(*s) != self.shape) {
            lines.push(format!(
                "Second Best: {second} ({:.1}% difference)",
                self.score_diff * 100.0
            ));
        }

        if let Some(m) = m {
            lines.push(format!("Face Ratio (L/W): {:.2}", m.ratios.face_ratio));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::landmarks::FACE_MESH_LANDMARKS;
    use crate::measurements::measure;
    use crate::types::FaceShape;

    fn face() -> Vec<Landmark> {
        let mut points = vec![Landmark::default(); FACE_MESH_LANDMARKS];
        for (i, role) in LandmarkRole::ALL.iter().enumerate() {
            points[role.index()] = Landmark::new(100.0 + i as f64 * 10.0, 50.0 + i as f64 * 7.0);
        }
        points
    }

    #[test]
    fn test_lines_resolve_role_points() {
        let points = face();
        let m = measure(&points).unwrap();
        let lines = measurement_lines(&points, &m).unwrap();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].label, "Face Length");
        assert_eq!(lines[0].from, points[LandmarkRole::ForeheadTop.index()]);
        assert_eq!(lines[0].to, points[LandmarkRole::ChinBottom.index()]);
        assert_eq!(lines[0].length, m.face_length);
        assert_eq!(lines[9].label, "Forehead Width");
        assert_eq!(lines[9].length, m.forehead_width);
    }

    #[test]
    fn test_line_lengths_match_endpoints() {
        let points = face();
        let m = measure(&points).unwrap();
        for line in measurement_lines(&points, &m).unwrap() {
            let d = crate::geometry::distance(&line.from, &line.to);
            assert!((d - line.length).abs() < 1e-9, "{}", line.label);
        }
    }

    #[test]
    fn test_lines_reject_short_input() {
        let points = face();
        let m = measure(&points).unwrap();
        assert!(measurement_lines(&points[..50], &m).is_err());
    }

    #[test]
    fn test_summary_for_unknown() {
        let lines = Classification::unknown().summary_lines(None);
        assert_eq!(lines, vec!["Detected Face Shape: Unknown", "Confidence: 0%"]);
    }

    #[test]
    fn test_summary_with_runner_up() {
        let result = Classification {
            shape: Some(FaceShape::Round),
            confidence: 85.5,
            scores: None,
            second_best_shape: Some(FaceShape::Square),
            score_diff: 0.1,
            quality: Some(0.9),
        };
        let points = face();
        let m = measure(&points).unwrap();
        let lines = result.summary_lines(Some(&m));

        assert_eq!(lines[0], "Detected Face Shape: Round");
        assert_eq!(lines[1], "Confidence: 85.5%");
        assert_eq!(lines[2], "Measurement Quality: 90%");
        assert_eq!(lines[3], "Second Best: Square (10.0% difference)");
        assert!(lines[4].starts_with("Face Ratio (L/W): "));
    }

    #[test]
    fn test_summary_from_classification() {
        let points = face();
        let m = measure(&points).unwrap();
        let result = classify(&m);
        let lines = result.summary_lines(Some(&m));
        assert!(lines[0].ends_with(result.label()));
    }
}
