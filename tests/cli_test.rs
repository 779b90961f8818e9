//! CLI contract tests
//!
//! Runs the `face-rating` binary against detection files written to a temp
//! directory and checks the rendered rating, JSON output and failure modes.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{json, Value};

fn face_rating_bin() -> String {
    env!("CARGO_BIN_EXE_face-rating").to_string()
}

fn golden_face_json() -> Value {
    let mut points = vec![json!({"x": 0.0, "y": 0.0}); 68];
    points[36] = json!({"x": -80.9, "y": 0.0});
    points[45] = json!({"x": 80.9, "y": 0.0});
    points[30] = json!({"x": 0.0, "y": 40.0});
    points[48] = json!({"x": -30.0, "y": 100.0});
    points[54] = json!({"x": 30.0, "y": 100.0});
    Value::Array(points)
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(face_rating_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("FACE_RATING_CONFIG")
        .output()
        .unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let detections = json!([golden_face_json()]);
    let input = write_file(dir.path(), "faces.json", detections.to_string().as_bytes());

    let (code, stdout, _) = run(&[input.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 8.8 / 10"), "stdout: {stdout}");
    assert!(stdout.contains("Symmetry: 100%"));
    assert!(stdout.contains("Proportions: 100%"));
    assert!(stdout.contains("Landmarks: 61%"));
}

#[test]
fn test_json_output_with_wrapped_input() {
    let dir = tempfile::tempdir().unwrap();
    let detections = json!({"faces": [golden_face_json()]});
    let input = write_file(dir.path(), "faces.json", detections.to_string().as_bytes());

    let (code, stdout, _) = run(&[input.to_str().unwrap(), "--json"]);
    assert_eq!(code, 0);

    let rating: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rating["total"], json!(8.8));
    assert_eq!(rating["symmetry"], json!(100));
    assert_eq!(rating["landmarks"], json!(61));
}

#[test]
fn test_single_face_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "face.json", golden_face_json().to_string().as_bytes());

    let (code, stdout, _) = run(&[input.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 8.8 / 10"));
}

#[test]
fn test_raw_f32_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut values = vec![0.0f32; 68 * 2];
    for (index, (x, y)) in [
        (36, (-100.0, 0.0)),
        (45, (100.0, 0.0)),
        (30, (0.0, 50.0)),
        (48, (-40.0, 120.0)),
        (54, (40.0, 120.0)),
    ] {
        values[index * 2] = x;
        values[index * 2 + 1] = y;
    }
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    let input = write_file(dir.path(), "face.bin", &bytes);

    let (code, stdout, _) = run(&[input.to_str().unwrap(), "--format", "f32le", "--json"]);
    assert_eq!(code, 0);

    let rating: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rating["symmetry"], json!(100));
}

#[test]
fn test_no_face_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "faces.json", b"[]");

    let (code, stdout, stderr) = run(&[input.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no face detected"), "stderr: {stderr}");
    assert_eq!(stderr.matches("no face detected").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_debug_log_shows_reference_points() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "faces.json", json!([golden_face_json()]).to_string().as_bytes());

    let (code, stdout, stderr) = run(&[input.to_str().unwrap(), "--log-level", "debug"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 8.8 / 10"));
    assert!(stderr.contains("reference points"), "stderr: {stderr}");
    assert!(stderr.contains("-80.9"), "stderr: {stderr}");
}

#[test]
fn test_multiple_faces_fail() {
    let dir = tempfile::tempdir().unwrap();
    let detections = json!([golden_face_json(), golden_face_json()]);
    let input = write_file(dir.path(), "faces.json", detections.to_string().as_bytes());

    let (code, _, stderr) = run(&[input.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("2 faces detected"), "stderr: {stderr}");
}

#[test]
fn test_config_file_changes_weights() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "faces.json", json!([golden_face_json()]).to_string().as_bytes());
    let config = write_file(
        dir.path(),
        "config.json",
        br#"{"weights": {"symmetry": 0.5, "proportions": 0.5, "landmarks": 0.0}}"#,
    );

    let (code, stdout, _) = run(&[input.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Score: 10.0 / 10"), "stdout: {stdout}");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "faces.json", json!([golden_face_json()]).to_string().as_bytes());
    let config = write_file(dir.path(), "config.json", br#"{"weights": {"symmetry": 0.9}}"#);

    let (code, _, stderr) = run(&[input.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("weights must sum to 1"), "stderr: {stderr}");
}

#[test]
fn test_short_landmark_set_fails() {
    let dir = tempfile::tempdir().unwrap();
    let face = json!([[{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}]]);
    let input = write_file(dir.path(), "faces.json", face.to_string().as_bytes());

    let (code, _, stderr) = run(&[input.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("at least 55 are required"), "stderr: {stderr}");
}
