#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("forgec").chain(args.iter().copied()))
        .unwrap()
        .command
}

#[test]
fn test_check_defaults() {
    let Command::Check { scan } = parse(&["check", "src/lib.rs"]) else {
        panic!("expected check");
    };
    assert_eq!(scan.root, PathBuf::from("src/lib.rs"));
    assert!(scan.externs.is_empty());
    assert_eq!(scan.format, OutputFormat::Human);
    assert_eq!(scan.color, ColorMode::Auto);
    assert_eq!(scan.error_limit, 10);
}

#[test]
fn test_generate_with_all_flags() {
    let Command::Generate { scan, out_dir } = parse(&[
        "generate",
        "src/lib.rs",
        "--out-dir",
        "gen",
        "--extern",
        "menu::Meal=interface",
        "--extern",
        "menu::Base=class",
        "--format",
        "json",
        "--color",
        "never",
        "--error-limit",
        "0",
    ]) else {
        panic!("expected generate");
    };
    assert_eq!(out_dir, PathBuf::from("gen"));
    assert_eq!(
        scan.externs,
        [
            ("menu::Meal".to_string(), TypeKind::Interface),
            ("menu::Base".to_string(), TypeKind::Class),
        ]
    );
    assert_eq!(scan.format, OutputFormat::Json);
    assert_eq!(scan.color, ColorMode::Never);
    assert_eq!(scan.error_limit, 0);
}

#[test]
fn test_generate_requires_out_dir() {
    let result = Cli::try_parse_from(["forgec", "generate", "src/lib.rs"]);
    assert!(result.is_err());
}

#[test]
fn test_explain_code() {
    let Command::Explain { code } = parse(&["explain", "F2001"]) else {
        panic!("expected explain");
    };
    assert_eq!(code, "F2001");
}

#[test]
fn test_parse_extern() {
    assert_eq!(
        parse_extern("a::B=trait"),
        Ok(("a::B".to_string(), TypeKind::Interface))
    );
    assert_eq!(
        parse_extern("a::B = type"),
        Ok(("a::B".to_string(), TypeKind::Class))
    );
    assert!(parse_extern("a::B").is_err());
    assert!(parse_extern("a::B=struct").is_err());
}

#[test]
fn test_bad_values_are_rejected() {
    assert!(parse_format("xml").is_err());
    assert!(parse_color("sometimes").is_err());
    assert!(Cli::try_parse_from(["forgec", "check", "x.rs", "--format", "xml"]).is_err());
}
