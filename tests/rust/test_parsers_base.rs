use super::*;

#[test]
fn test_significant_lines_skip_blank_and_comments() {
    let src = "flowchart LR\n\n  %% a comment\nA --> B\n   \nB";
    let lines = significant_lines(src);
    let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 4, 6]);
    assert_eq!(lines[1].text, "A --> B");
}

#[test]
fn test_significant_lines_handles_crlf() {
    let lines = significant_lines("flowchart TB\r\nA\r\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].text, "A");
}

#[test]
fn test_statement_strips_semicolon() {
    let line = SourceLine {
        number: 2,
        text: "   A --> B ;  ",
    };
    assert_eq!(line.statement(), "A --> B");
}

#[test]
fn test_parse_node_ref_bare() {
    assert_eq!(parse_node_ref("A"), Some(NodeRef::new("A", None)));
    assert_eq!(parse_node_ref("node_1"), Some(NodeRef::new("node_1", None)));
}

#[test]
fn test_parse_node_ref_with_label() {
    let r = parse_node_ref("A[ Hello World ]").unwrap();
    assert_eq!(r.id, "A");
    assert_eq!(r.label.as_deref(), Some("Hello World"));
}

#[test]
fn test_parse_node_ref_class_suffix() {
    let r = parse_node_ref("A[Start]:::hot").unwrap();
    assert_eq!(r.id, "A");
    assert_eq!(r.label.as_deref(), Some("Start"));
    assert_eq!(parse_node_ref("B:::cold"), Some(NodeRef::new("B", None)));
}

#[test]
fn test_parse_node_ref_rejects_bad_tokens() {
    assert_eq!(parse_node_ref(""), None);
    assert_eq!(parse_node_ref("my-node"), None);
    assert_eq!(parse_node_ref("A(Round)"), None);
    assert_eq!(parse_node_ref("A[unclosed"), None);
    assert_eq!(parse_node_ref("A B"), None);
}

#[test]
fn test_split_chain_on_top_level_operators() {
    assert_eq!(split_chain("A --> B-->C"), vec!["A ", " B", "C"]);
    assert_eq!(split_chain("A"), vec!["A"]);
    assert_eq!(split_chain("A -->"), vec!["A ", ""]);
}

#[test]
fn test_split_chain_ignores_operator_inside_label() {
    assert_eq!(
        split_chain("A[go --> there] --> B[日本 --> 語]"),
        vec!["A[go --> there] ", " B[日本 --> 語]"]
    );
}
