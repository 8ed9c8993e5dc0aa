#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;
use forge_ir::Location;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::F2001)
        .with_message("id `Margherita` is already used for `crate::Meal`")
        .with_label(Location::new("src/b.rs", 7, 1), "duplicate id")
        .with_secondary_label(Location::new("src/a.rs", 3, 1), "first registered here")
        .with_note("ids must be unique within one capability type")
        .with_suggestion("pick a different id")
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error[F2001]: id `Margherita` is already used for `crate::Meal`\n\
         \x20 --> src/b.rs:7:1: duplicate id\n\
         \x20 ::: src/a.rs:3:1: first registered here\n\
         \x20  = note: ids must be unique within one capability type\n\
         \x20  = help: pick a different id\n\
         \n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("F2001"));
}

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_summary_wording() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(3, 1);
    emitter.emit_summary(0, 2);
    emitter.emit_summary(0, 0);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: aborting due to previous error\n\
         error: aborting due to 3 previous errors; 1 warning emitted\n\
         warning: 2 warnings emitted\n"
    );
}
