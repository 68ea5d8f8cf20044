use importgraph::core::scanner::FileScanner;
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_keeps_only_files_directly_in_package_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("com/example/pkg/sub")).unwrap();
    fs::create_dir_all(root.join("com/example/other")).unwrap();

    touch(root.join("com/example/pkg/B.java"));
    touch(root.join("com/example/pkg/A.java"));
    touch(root.join("com/example/pkg/notes.txt"));
    touch(root.join("com/example/pkg/sub/Nested.java"));
    touch(root.join("com/example/other/Sibling.java"));

    let outcome = FileScanner::new("java")
        .scan_package(root, "com/example/pkg")
        .unwrap();

    let names: Vec<_> = outcome
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A.java", "B.java"]);
    assert!(outcome
        .files
        .iter()
        .all(|f| f.relative_dir == "com/example/pkg"));
    assert_eq!(outcome.files_visited, 5);
    assert_eq!(outcome.candidates, 4);
}

#[test]
fn scanner_honours_configured_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("app")).unwrap();
    touch(root.join("app/Main.kt"));
    touch(root.join("app/Main.java"));

    let outcome = FileScanner::new(".kt").scan_package(root, "app").unwrap();
    assert_eq!(outcome.files.len(), 1);
    assert!(outcome.files[0].path.ends_with("app/Main.kt"));
}

#[test]
fn empty_package_dir_matches_files_at_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("nested")).unwrap();
    touch(root.join("Top.java"));
    touch(root.join("nested/Inner.java"));

    let outcome = FileScanner::new("java").scan_package(root, "").unwrap();
    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.files[0].relative_dir, "");
}

#[cfg(unix)]
#[test]
fn unreadable_sibling_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("p")).unwrap();
    fs::create_dir_all(root.join("locked")).unwrap();
    fs::write(root.join("p/A.java"), "import x.Y;\n").unwrap();
    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();

    let result = FileScanner::new("java").scan_package(root, "p");

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
    let outcome = result.unwrap();
    assert_eq!(outcome.files.len(), 1);
    assert!(outcome.files[0].path.ends_with("p/A.java"));
}
