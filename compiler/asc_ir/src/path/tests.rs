use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_normalize_trims_leading_dot_slash() {
    assert_eq!(normalize_path("./a/b"), "a/b");
    assert_eq!(normalize_path("././a"), "a");
    assert_eq!(normalize_path("./"), ".");
    assert_eq!(normalize_path(""), ".");
}

#[test]
fn test_normalize_collapses_dot_segments() {
    assert_eq!(normalize_path("a/./b"), "a/b");
    assert_eq!(normalize_path("a/b/."), "a/b");
    assert_eq!(normalize_path("a/./"), "a/");
}

#[test]
fn test_normalize_resolves_parent_segments() {
    assert_eq!(normalize_path("a/b/../c"), "a/c");
    assert_eq!(normalize_path("a/.."), ".");
    assert_eq!(normalize_path("a/../../b"), "../b");
    assert_eq!(normalize_path("/a/../b"), "/b");
}

#[test]
fn test_normalize_keeps_leading_parent_segments() {
    assert_eq!(normalize_path("../a"), "../a");
    assert_eq!(normalize_path("../../a"), "../../a");
    assert_eq!(normalize_path("/.."), "/..");
}

#[test]
fn test_dirname() {
    assert_eq!(dirname(""), ".");
    assert_eq!(dirname("/"), "/");
    assert_eq!(dirname("a"), ".");
    assert_eq!(dirname("a/b"), "a");
    assert_eq!(dirname("a/b/c"), "a/b");
    assert_eq!(dirname("~lib/array"), "~lib");
}

#[test]
fn test_resolve_path() {
    assert_eq!(resolve_path("foo", "src/index"), "src/foo");
    assert_eq!(resolve_path("../foo", "src/util/index"), "src/foo");
    assert_eq!(resolve_path("foo", "index"), "foo");
    assert_eq!(resolve_path("std/array", "src/index"), "std/array");
}

#[test]
fn test_mangle_internal_path() {
    assert_eq!(mangle_internal_path("src/index.ts"), "src/index");
    assert_eq!(mangle_internal_path("src/dir/"), "src/dir/index");
    assert_eq!(mangle_internal_path("~lib/array"), "~lib/array");
}
