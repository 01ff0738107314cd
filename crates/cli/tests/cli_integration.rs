use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    time::{SystemTime, UNIX_EPOCH},
};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "varposter_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    fn font(&self) -> PathBuf {
        let path = self.path.join("variable.ttf");
        fs::write(&path, font_test_data::VAZIRMATN_VAR).expect("write test font");
        path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_varposter(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_varposter"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run varposter")
}

#[test]
fn gradient_writes_pdf() {
    let dir = TestDir::new("gradient_pdf");
    let font = dir.font();
    let output = dir.path.join("gradient.pdf");
    let font = font.to_str().unwrap();
    let output = output.to_str().unwrap();

    let result = run_varposter(&["gradient", font, "-o", output], &dir.path);

    assert!(result.status.success(), "process failed: {result:?}");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Wrote"), "unexpected stdout: {stdout}");
    let pdf = fs::read(output).expect("read output");
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn gradient_writes_svg_with_canvas_size() {
    let dir = TestDir::new("gradient_svg");
    let font = dir.font();

    let result = run_varposter(
        &[
            "gradient",
            font.to_str().unwrap(),
            "--lines",
            "3",
            "--canvas-width",
            "600",
            "--canvas-height",
            "400",
            "-o",
            "poster.svg",
            "-q",
        ],
        &dir.path,
    );

    assert!(result.status.success(), "process failed: {result:?}");
    assert!(result.stdout.is_empty());
    let svg = fs::read_to_string(dir.path.join("poster.svg")).expect("read svg");
    assert!(svg.contains("viewBox=\"0 0 600 400\""));
}

#[test]
fn gradient_rejects_single_line() {
    let dir = TestDir::new("gradient_invalid");
    let font = dir.font();
    let font = font.to_str().unwrap();

    let result = run_varposter(&["gradient", font, "--lines", "1"], &dir.path);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("invalid configuration"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn fit_uses_default_output_name() {
    let dir = TestDir::new("fit_default");
    let font = dir.font();
    let font = font.to_str().unwrap();

    let result = run_varposter(&["fit", font, "--format", "a3"], &dir.path);

    assert!(result.status.success(), "process failed: {result:?}");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Measurements:"));
    assert!(stdout.contains("wdth 160"));
    assert!(dir.path.join("output_A3_margin40.pdf").exists());
}

#[test]
fn fit_unknown_format_falls_back_to_a4() {
    let dir = TestDir::new("fit_fallback");
    let font = dir.font();
    let font = font.to_str().unwrap();

    let result = run_varposter(
        &["fit", font, "--format", "tabloid", "--margin", "20"],
        &dir.path,
    );

    assert!(result.status.success(), "process failed: {result:?}");
    assert!(dir.path.join("output_A4_margin20.pdf").exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Unknown paper format 'tabloid', using A4"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn missing_glyphs_are_reported_without_rust_log() {
    let dir = TestDir::new("missing_glyphs");
    let font = dir.font();
    let font = font.to_str().unwrap();

    let result = run_varposter(
        &["gradient", font, "--text", "AB\u{E000}", "-o", "poster.svg"],
        &dir.path,
    );

    assert!(result.status.success(), "process failed: {result:?}");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("drawing .notdef instead"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn fit_rejects_unknown_extension() {
    let dir = TestDir::new("fit_extension");
    let font = dir.font();
    let font = font.to_str().unwrap();

    let result = run_varposter(&["fit", font, "-o", "poster.png"], &dir.path);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("unsupported output format"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn info_lists_axes() {
    let dir = TestDir::new("info");
    let font = dir.font();

    let result = run_varposter(&["info", font.to_str().unwrap()], &dir.path);

    assert!(result.status.success(), "process failed: {result:?}");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Variable font axes:"));
    assert!(stdout.contains("wght"));
}

#[test]
fn missing_font_is_reported() {
    let dir = TestDir::new("missing_font");

    let result = run_varposter(&["info", "no-such-font.ttf"], &dir.path);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Failed to read font"),
        "unexpected stderr: {stderr}"
    );
}
