//! The `explain` command: display documentation for error codes.

use forge_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        return 1;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        0
    } else {
        eprintln!("No documentation available for {code}");
        eprintln!();
        eprintln!("{code}: {}", code.description());
        1
    }
}
