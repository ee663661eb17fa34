#![allow(clippy::unwrap_used)]

use super::*;
use crate::{DiagnosticCode, DiagnosticEmitter};
use asc_ir::{Range, SourceKind};

fn sample(sources: &mut SourceMap) -> DiagnosticEmitter {
    let id = sources.add(SourceKind::User, "src/main.ts", "let s = \"open\nlet t = 1;\n");
    let mut emitter = DiagnosticEmitter::new();
    emitter.error(DiagnosticCode::UnterminatedStringLiteral, Range::new(id, 8, 13), &[]);
    emitter.warning(DiagnosticCode::UnexpectedToken, Range::new(id, 14, 17), &[]);
    emitter
}

#[test]
fn renders_without_color() {
    let mut sources = SourceMap::new();
    let emitter = sample(&mut sources);
    let mut output = Vec::new();
    let mut renderer =
        TerminalRenderer::with_color_mode(&mut output, &sources, ColorMode::Never, true);

    renderer.emit_all(emitter.diagnostics());
    renderer.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("ERROR TS1002: Unterminated string literal.\n"));
    assert!(text.contains(" 1 │ let s = \"open\n"));
    assert!(text.contains("└─ in src/main.ts(1,9)\n\n"));
    assert!(text.contains("WARNING TS1012: Unexpected token."));
    assert!(!text.contains("\x1b["));
}

#[test]
fn renders_with_color() {
    let mut sources = SourceMap::new();
    let emitter = sample(&mut sources);
    let mut output = Vec::new();
    let mut renderer =
        TerminalRenderer::with_color_mode(&mut output, &sources, ColorMode::Always, false);

    renderer.emit(&emitter.diagnostics()[0]);

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("\x1b[91mERROR\x1b[0m"));
}

#[test]
fn locator_only_without_context() {
    let mut sources = SourceMap::new();
    let emitter = sample(&mut sources);
    let mut output = Vec::new();
    let mut renderer =
        TerminalRenderer::with_color_mode(&mut output, &sources, ColorMode::Never, false)
            .with_context(false);

    renderer.emit(&emitter.diagnostics()[1]);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "WARNING TS1012: Unexpected token.\n in src/main.ts(2,1)\n\n");
}

#[test]
fn summary_counts() {
    let sources = SourceMap::new();
    let mut output = Vec::new();
    let mut renderer =
        TerminalRenderer::with_color_mode(&mut output, &sources, ColorMode::Never, false);

    renderer.emit_summary(2, 1);
    renderer.emit_summary(1, 0);
    renderer.emit_summary(0, 3);
    renderer.emit_summary(0, 0);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "ERROR: 2 errors, 1 warning\nERROR: 1 error\nWARNING: 3 warnings\n"
    );
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
