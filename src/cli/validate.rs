use colored::Colorize;

use crate::codes::{validate_any, CodeKind};
use crate::error::{CodeError, Result};

pub fn run(code: &str, kind: Option<CodeKind>) -> Result<()> {
    let verdict = match kind {
        Some(kind) => Some((kind, kind.validate(code))),
        None => validate_any(code),
    };
    match verdict {
        Some((kind, true)) => {
            println!("{} {kind} code", "valid".green());
            Ok(())
        }
        Some((kind, false)) => {
            println!("{} {kind} code", "invalid".red());
            Err(CodeError::InvalidCode(format!(
                "{code} is not a well-formed {kind} code (expected {})",
                kind.pattern()
            )))
        }
        None => {
            println!("{}", "invalid".red());
            Err(CodeError::InvalidCode(format!("{code} has no recognized prefix")))
        }
    }
}
