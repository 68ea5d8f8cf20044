use importgraph::core::package::{package_segments, source_parts};
use importgraph::core::PackagePath;
use importgraph::error::ExtractError;
use std::fs;
use std::path::Path;

#[test]
fn full_package_path_is_nested_under_source_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("com/example/pkg")).unwrap();

    let resolved = PackagePath::resolve("com.example.pkg", &src).unwrap();
    assert_eq!(resolved.relative, "com/example/pkg");
    assert_eq!(resolved.directory, src.join("com").join("example").join("pkg"));
}

#[test]
fn overlapping_source_root_is_stripped() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("src/com/example");
    fs::create_dir_all(root.join("pkg")).unwrap();

    let resolved = PackagePath::resolve("com.example.pkg", &root).unwrap();
    assert_eq!(resolved.relative, "pkg");
}

#[test]
fn missing_package_directory_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();

    match PackagePath::resolve("com.example.pkg", &src) {
        Err(ExtractError::PackageNotFound { expected, .. }) => {
            assert!(expected.ends_with("com/example/pkg"));
        }
        other => panic!("expected PackageNotFound, got {other:?}"),
    }
}

#[test]
fn missing_source_dir_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = PackagePath::resolve("a.b", &dir.path().join("nope"));
    assert!(matches!(result, Err(ExtractError::SourceDirMissing { .. })));
}

#[test]
fn invalid_identifiers_are_rejected() {
    for bad in ["", "com..pkg", "com.1st", "com/pkg", "..", "a.b."] {
        assert!(
            matches!(
                package_segments(bad),
                Err(ExtractError::InvalidPackage { .. })
            ),
            "{bad:?} should be rejected"
        );
    }
    assert_eq!(
        package_segments("com.example.$inner_1").unwrap(),
        vec!["com", "example", "$inner_1"]
    );
}

#[test]
fn source_parts_drop_relative_markers() {
    assert_eq!(source_parts(Path::new("./src/main")), vec!["src", "main"]);
    assert_eq!(source_parts(Path::new("src")), vec!["src"]);
}
