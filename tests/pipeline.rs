//! End-to-end pipeline tests: validate -> encode -> sanitize -> export -> decode

use anyhow::Result;
use shareqr::{
    Error, QrDecoder, QrGenerator, ShareqrConfig, filename, validate,
};
use std::path::PathBuf;

fn generator_into(dir: &std::path::Path) -> QrGenerator {
    let mut config = ShareqrConfig::default();
    config.output.dir = dir.to_path_buf();
    QrGenerator::new(&config)
}

#[test]
fn full_pipeline_round_trips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let generator = generator_into(dir.path());

    let generated = generator.generate("https://unc.edu/health")?;

    assert_eq!(generated.stem, "unc-edu-health");
    assert_eq!(
        generated.path,
        dir.path().join("unc-edu-health.png")
    );
    assert!(generated.path.exists());

    // The written file must scan back to the exact original string.
    let written = image::open(&generated.path)?;
    let decoded = QrDecoder::new().decode(&written)?;
    assert_eq!(decoded, "https://unc.edu/health");

    Ok(())
}

#[test]
fn invalid_format_never_reaches_export() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_into(dir.path());

    let result = generator.generate("ftp://example.com");
    assert!(matches!(result, Err(Error::InvalidFormat)));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no file should be written on failure");
}

#[test]
fn phi_url_never_reaches_export() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_into(dir.path());

    let result = generator.generate("http://example.com/patient-portal");
    assert!(matches!(result, Err(Error::PhiDetected(_))));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no file should be written on failure");
}

#[test]
fn trailing_slash_keeps_trailing_hyphen_in_filename() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let generator = generator_into(dir.path());

    let generated = generator.generate("https://a.b/")?;
    assert_eq!(generated.stem, "a-b-");
    assert_eq!(
        generated.path.file_name().and_then(|n| n.to_str()),
        Some("a-b-.png")
    );

    Ok(())
}

#[test]
fn render_without_export_leaves_no_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let generator = generator_into(dir.path());

    let surface = generator.render("https://example.com/page")?;
    assert_eq!(surface.encoded_str(), "https://example.com/page");

    let entries: Vec<_> = std::fs::read_dir(dir.path())?.collect();
    assert!(entries.is_empty());

    Ok(())
}

#[test]
fn configured_size_applies_to_surface() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = ShareqrConfig::default();
    config.output.dir = dir.path().to_path_buf();
    config.render.size = 512;
    let generator = QrGenerator::new(&config);

    let generated = generator.generate("https://example.com/big")?;
    assert!(generated.surface.side() >= 512);

    Ok(())
}

#[test]
fn sanitize_agrees_with_validate_for_typical_urls() -> Result<()> {
    // Anything the validator accepts should be sanitizable; the defensive
    // UrlParse path stays unreachable for these inputs.
    for url in [
        "https://unc.edu/health",
        "http://example.com/a/b/c",
        "https://sub.domain.example.org/x?q=1",
    ] {
        let valid = validate(url)?;
        let stem = filename::sanitize(valid.as_str())?;
        assert!(!stem.is_empty());
        assert!(stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
    Ok(())
}

#[test]
fn export_path_is_deterministic() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let generator = generator_into(dir.path());

    let first: PathBuf = generator.generate("https://unc.edu/health")?.path;
    let second: PathBuf = generator.generate("https://unc.edu/health")?.path;
    assert_eq!(first, second);

    Ok(())
}
