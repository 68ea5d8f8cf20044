use importgraph::core::DependencyMap;
use importgraph::formatters::DotFormatter;
use std::fs;

#[test]
fn dot_formatter_emits_edges_in_order_with_duplicates() {
    let map: DependencyMap = [("p", vec!["a", "b", "a"])].into_iter().collect();
    let out = DotFormatter::new().format(&map);

    assert_eq!(
        out,
        "digraph dependencies {\n  \"p\" -> \"a\";\n  \"p\" -> \"b\";\n  \"p\" -> \"a\";\n}\n"
    );
}

#[test]
fn dot_formatter_empty_map_has_only_block_markers() {
    let out = DotFormatter::new().format(&DependencyMap::new());
    assert_eq!(out, "digraph dependencies {\n}\n");
}

#[test]
fn dot_formatter_escapes_quotes_and_backslashes() {
    let map: DependencyMap = [("p", vec![r#"we"ird\name"#])].into_iter().collect();
    let out = DotFormatter::new().format(&map);
    assert!(out.contains(r#"  "p" -> "we\"ird\\name";"#));
}

#[test]
fn format_to_file_overwrites_existing_content() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("deps.dot");
    fs::write(&path, "stale content that is much longer than the new graph\n").unwrap();

    let map: DependencyMap = [("p", vec!["a"])].into_iter().collect();
    DotFormatter::new().format_to_file(&map, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "digraph dependencies {\n  \"p\" -> \"a\";\n}\n");
}
