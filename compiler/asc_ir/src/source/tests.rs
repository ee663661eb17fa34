use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn single(text: &str) -> SourceMap {
    let mut sources = SourceMap::new();
    sources.add(SourceKind::User, "src/index.ts", text);
    sources
}

#[test]
fn test_path_variants() {
    let mut sources = SourceMap::new();
    let id = sources.add(SourceKind::UserEntry, "src/util/index.ts", "");
    let source = &sources[id];
    assert_eq!(source.normalized_path(), "src/util/index.ts");
    assert_eq!(source.internal_path(), "src/util/index");
    assert_eq!(source.simple_path(), "index");
    assert!(!source.is_library());
    assert!(!source.is_native());
}

#[test]
fn test_native_source_is_registered_once() {
    let mut sources = SourceMap::new();
    let first = sources.native();
    let second = sources.native();
    assert_eq!(first, second);
    assert_eq!(sources.len(), 1);
    let native = &sources[first];
    assert!(native.is_native());
    assert!(native.is_library());
    assert_eq!(native.text(), "[native code]");
}

#[test]
fn test_line_at_and_column_at() {
    let sources = single("ab\ncd\n\nefg");
    let source = &sources[SourceId::from_raw(0)];

    assert_eq!(source.line_at(0), 1);
    assert_eq!(source.column_at(), 1);

    assert_eq!(source.line_at(2), 1);
    assert_eq!(source.column_at(), 3);

    assert_eq!(source.line_at(3), 2);
    assert_eq!(source.column_at(), 1);

    assert_eq!(source.line_at(6), 3);
    assert_eq!(source.column_at(), 1);

    assert_eq!(source.line_at(9), 4);
    assert_eq!(source.column_at(), 3);
}

#[test]
fn test_line_at_end_of_text() {
    let sources = single("a\nb");
    let source = &sources[SourceId::from_raw(0)];
    assert_eq!(source.line_col(3), (2, 2));
}

#[test]
#[should_panic(expected = "31-bit offset bound")]
fn test_line_at_rejects_huge_offset() {
    let sources = single("a");
    let _ = sources[SourceId::from_raw(0)].line_at(0x7fff_ffff);
}

#[test]
fn test_line_start() {
    let sources = single("ab\ncd\n");
    let source = &sources[SourceId::from_raw(0)];
    assert_eq!(source.line_start(1), Some(0));
    assert_eq!(source.line_start(2), Some(3));
    assert_eq!(source.line_start(3), Some(6));
    assert_eq!(source.line_start(4), None);
    assert_eq!(source.line_start(0), None);
}

#[test]
fn test_source_node_range() {
    let sources = single("let x = 1;");
    let source = &sources[SourceId::from_raw(0)];
    assert_eq!(Node::kind(source), NodeKind::Source);
    assert_eq!(Node::range(source), Range::new(source.id(), 0, 10));
}

#[test]
fn test_range_text() {
    let sources = single("let x = 1;");
    let range = Range::new(SourceId::from_raw(0), 4, 5);
    assert_eq!(range.text(&sources), "x");
}

proptest! {
    #[test]
    fn line_and_column_reconstruct_offset(
        text in "[a-z \\n]{0,200}",
        seed in any::<usize>(),
    ) {
        let sources = single(&text);
        let source = &sources[SourceId::from_raw(0)];
        let pos = u32::try_from(seed % (text.len() + 1)).unwrap_or(0);
        let line = source.line_at(pos);
        let column = source.column_at();
        let start = source.line_start(line);
        prop_assert_eq!(start.map(|s| s + column - 1), Some(pos));
    }
}
