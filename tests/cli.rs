use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pet-report"))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("pet_report_cli_{}_{}_{}", std::process::id(), nanos, name))
}

fn fonts_available() -> bool {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
        .box_size("Count")
        .is_ok()
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .env_remove("PET_REPORT_CSV")
        .env_remove("PET_REPORT_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn prints_columns_and_writes_json() {
    let csv = fixture_path("pet_product_count.csv");
    let out = tmp_path("chart.json");

    let output = run(&[
        csv.to_string_lossy().as_ref(),
        "--output",
        out.to_string_lossy().as_ref(),
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[\"pet_type\", \"product_category\", \"count\"]\n"
    );

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let heights: Vec<f64> = value["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["height"].as_f64().unwrap())
        .collect();
    assert_eq!(heights, vec![12.0, 7.0, 3.0]);

    let _ = std::fs::remove_file(&out);
}

#[test]
fn csv_path_from_environment() {
    let out = tmp_path("env_chart.json");
    let output = Command::new(bin_path())
        .args(["--output", out.to_string_lossy().as_ref()])
        .env("PET_REPORT_CSV", fixture_path("pet_product_count.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.exists());

    let _ = std::fs::remove_file(&out);
}

#[test]
fn missing_file_exits_with_failure() {
    let out = tmp_path("never.json");
    let output = run(&[
        "/definitely/not/here/pets.csv",
        "--output",
        out.to_string_lossy().as_ref(),
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!out.exists());
}

#[test]
fn missing_count_column_exits_with_failure() {
    let out = tmp_path("no_count.json");
    let output = run(&[
        fixture_path("missing_count.csv").to_string_lossy().as_ref(),
        "--output",
        out.to_string_lossy().as_ref(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Column not found: count"));
    assert!(!out.exists());
}

#[test]
fn writes_svg_chart() {
    if !fonts_available() {
        eprintln!("skipping: no sans-serif font available");
        return;
    }

    let out = tmp_path("chart.svg");
    let output = run(&[
        fixture_path("pet_product_count.csv").to_string_lossy().as_ref(),
        "-o",
        out.to_string_lossy().as_ref(),
        "--width",
        "640",
        "--height",
        "480",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("width=\"640\""));
    assert_eq!(svg.matches("fill=\"#3498DB\"").count(), 3);

    let _ = std::fs::remove_file(&out);
}

#[test]
fn header_only_file_succeeds_with_no_bars() {
    let out = tmp_path("empty.json");
    let output = run(&[
        fixture_path("header_only.csv").to_string_lossy().as_ref(),
        "--output",
        out.to_string_lossy().as_ref(),
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(value["bars"].as_array().unwrap().is_empty());

    let _ = std::fs::remove_file(&out);
}
