//! Text and JSON rendering of results.

use crate::batch::FileOutcome;
use faceshape_core::overlay::MeasurementLine;
use faceshape_core::{Classification, FaceMeasurements, LandmarkRole};
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Overlay summary followed by the raw score of every category.
pub fn classification_text(result: &Classification, m: Option<&FaceMeasurements>) -> String {
    let mut lines = result.summary_lines(m);
    if let Some(scores) = &result.scores {
        let row: Vec<String> = scores
            .iter()
            .map(|(shape, score)| format!("{shape} {score:.2}"))
            .collect();
        lines.push(format!("Scores: {}", row.join(", ")));
    }
    lines.join("\n")
}

pub fn batch_text(outcomes: &[FileOutcome]) -> String {
    let blocks: Vec<String> = outcomes
        .iter()
        .map(|o| {
            let body = match &o.result {
                Ok(result) => classification_text(result, None),
                Err(e) => format!("error: {e:#}"),
            };
            format!("== {}\n{body}", o.path.display())
        })
        .collect();
    blocks.join("\n\n")
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Entry<'a> {
    Result(&'a Classification),
    Error(String),
}

#[derive(Serialize)]
struct FileEntry<'a> {
    file: String,
    #[serde(flatten)]
    entry: Entry<'a>,
}

pub fn batch_json(outcomes: &[FileOutcome], pretty: bool) -> serde_json::Result<String> {
    let entries: Vec<FileEntry<'_>> = outcomes
        .iter()
        .map(|o| FileEntry {
            file: o.path.display().to_string(),
            entry: match &o.result {
                Ok(result) => Entry::Result(result),
                Err(e) => Entry::Error(format!("{e:#}")),
            },
        })
        .collect();
    to_json(&entries, pretty)
}

pub fn measurement_text(m: &FaceMeasurements, lines: &[MeasurementLine], result: &Classification) -> String {
    let r = &m.ratios;
    let mut rows: Vec<String> = lines
        .iter()
        .map(|line| format!("{:<18} {:>9.1}", line.label, line.length))
        .collect();

    let angles = [
        ("Chin Angle", m.chin_angle),
        ("Left Jaw Angle", m.left_jaw_angle),
        ("Right Jaw Angle", m.right_jaw_angle),
    ];
    rows.extend(angles.iter().map(|(label, value)| format!("{label:<18} {value:>9.1}°")));
    rows.push(format!("{:<18} {:>9.1}", "Chin Projection", m.chin_projection));

    let ratios = [
        ("Face Ratio", r.face_ratio),
        ("Jaw / Face", r.jaw_to_forehead_ratio),
        ("Cheekbone / Jaw", r.cheekbone_to_jaw_ratio),
        ("Forehead / Cheek", r.forehead_to_cheekbone_ratio),
        ("Chin Top / Bottom", r.chin_top_to_bottom_ratio),
        ("Chin / Jaw", r.chin_to_jaw_ratio),
        ("Chin Mid / Jaw", r.chin_mid_to_jaw_ratio),
        ("Chin Angle Ratio", r.chin_angle_ratio),
        ("Jaw Angle Ratio", r.jaw_angle_ratio),
        ("Eye / Face", r.eye_to_face_ratio),
    ];
    rows.extend(ratios.iter().map(|(label, value)| format!("{label:<18} {value:>9.3}")));

    format!("{}\n\n{}", rows.join("\n"), classification_text(result, Some(m)))
}

#[derive(Serialize)]
struct MeasurementReport<'a> {
    measurements: &'a FaceMeasurements,
    lines: &'a [MeasurementLine],
    classification: &'a Classification,
}

pub fn measurement_json(
    m: &FaceMeasurements,
    lines: &[MeasurementLine],
    result: &Classification,
    pretty: bool,
) -> serde_json::Result<String> {
    to_json(
        &MeasurementReport { measurements: m, lines, classification: result },
        pretty,
    )
}

pub fn roles_text() -> String {
    LandmarkRole::ALL
        .iter()
        .map(|role| format!("{:>4}  {}", role.index(), role.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct RoleEntry {
    role: LandmarkRole,
    name: &'static str,
    index: usize,
}

pub fn roles_json(pretty: bool) -> serde_json::Result<String> {
    let entries: Vec<RoleEntry> = LandmarkRole::ALL
        .iter()
        .map(|&role| RoleEntry { role, name: role.name(), index: role.index() })
        .collect();
    to_json(&entries, pretty)
}
