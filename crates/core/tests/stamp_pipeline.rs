//! End-to-end pipeline through the public API: manifest on disk, metadata
//! resolution, rendering, atomic write and check mode.

use std::fs;

use verstamp_core::render::{self, Target};
use verstamp_core::verify::{self, CheckOutcome};
use verstamp_core::writer::ArtifactWriter;
use verstamp_core::{Manifest, StampError};

fn write_manifest(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("product.json");
    fs::write(&path, body).unwrap();
    path
}

const MANIFEST: &str = r#"{
    "major": 2,
    "minor": 7,
    "patch": 1,
    "date": "11-19-2020",
    "product": "Product-Name",
    "company": "United States Air Force (USAF)",
    "copyright": "Multiple",
    "trademarks": "All Rights Reserved",
    "domain": "https://airforce.com",
    "description": "Application for visualization of event log output",
    "original_filename": "app.exe"
}"#;

#[test]
fn manifest_to_artifacts_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write_manifest(dir.path(), MANIFEST);

    let meta = Manifest::load(&manifest_path).unwrap().into_metadata().unwrap();
    assert_eq!(meta.version_string(), "2.7.1");
    assert_eq!(meta.release_string(), "2.7.1 11-19-2020");

    for target in [Target::Header, Target::Rc, Target::Rust, Target::Json] {
        let text = render::render(&meta, target).unwrap();
        let path = dir.path().join(target.default_file_name(&meta));

        assert!(ArtifactWriter::write_if_changed(&path, &text).unwrap());
        // Identical regeneration must not rewrite the file.
        assert!(!ArtifactWriter::write_if_changed(&path, &text).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), text);

        let outcome = verify::check(&meta, target, &path).unwrap();
        assert_eq!(outcome, CheckOutcome::UpToDate);
    }
}

#[test]
fn stale_artifact_fails_check_after_version_bump() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write_manifest(dir.path(), MANIFEST);
    let meta = Manifest::load(&manifest_path).unwrap().into_metadata().unwrap();

    let path = dir.path().join(Target::Header.default_file_name(&meta));
    let text = render::render(&meta, Target::Header).unwrap();
    ArtifactWriter::write_if_changed(&path, &text).unwrap();

    let bumped = Manifest {
        patch: Some(2),
        version: None,
        ..Manifest::load(&manifest_path).unwrap()
    }
    .into_metadata()
    .unwrap();

    let outcome = verify::check(&bumped, Target::Header, &path).unwrap();
    let CheckOutcome::Stale(drift) = outcome else {
        panic!("expected stale outcome, got {outcome:?}");
    };
    assert!(drift.iter().any(|d| d.name == "APP_VERSION_PATCH"));
}

#[test]
fn inconsistent_manifest_aborts_generation() {
    let dir = tempfile::tempdir().unwrap();
    let body = r#"{
        "major": 2,
        "minor": 7,
        "patch": 1,
        "version": "9.9.9",
        "product": "Product-Name"
    }"#;
    let manifest_path = write_manifest(dir.path(), body);

    let err = Manifest::load(&manifest_path)
        .unwrap()
        .into_metadata()
        .unwrap_err();
    assert!(matches!(err, StampError::VersionMismatch { .. }));
}

#[test]
fn unknown_manifest_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write_manifest(dir.path(), r#"{ "produkt": "typo" }"#);

    let err = Manifest::load(&manifest_path).unwrap_err();
    assert!(matches!(err, StampError::ManifestParse { .. }));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_manifest_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("product.yaml");
    fs::write(
        &path,
        "major: 2\nminor: 7\npatch: 1\ndate: 11-19-2020\nproduct: Product-Name\n",
    )
    .unwrap();

    let meta = Manifest::load(&path).unwrap().into_metadata().unwrap();
    assert_eq!(meta.release_string(), "2.7.1 11-19-2020");
}
