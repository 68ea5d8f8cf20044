use std::fs;
use std::process::Command;

#[test]
fn missing_config_prints_message_and_stops() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_importgraph"))
        .current_dir(dir.path())
        .args(["--config", "config.xml", "--log-level", "off"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configuration file not found"));
    assert!(!stdout.contains("Package:"));
    assert!(!stdout.contains("DOT file created"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn skip_render_writes_dot_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let pkg = dir.path().join("src/com/example");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("A.java"), "package com.example;\nimport a.B;\n").unwrap();
    fs::write(
        dir.path().join("config.xml"),
        r#"<config>
    <graphvizPath>dot</graphvizPath>
    <packageName>com.example</packageName>
    <outputPath>deps.dot</outputPath>
    <sourceDir>./src</sourceDir>
</config>"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_importgraph"))
        .current_dir(dir.path())
        .args(["--skip-render", "--log-level", "off"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DOT file created: deps.dot"));
    let dot = fs::read_to_string(dir.path().join("deps.dot")).unwrap();
    assert_eq!(dot, "digraph dependencies {\n  \"com.example\" -> \"a.B\";\n}\n");
}
