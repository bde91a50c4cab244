//! Shunt
//!
//! Translates infix arithmetic expressions into postfix (Reverse Polish)
//! notation using the shunting-yard algorithm. Operands are single decimal
//! digits; `+ - * /` associate left, `^` associates right, and parentheses
//! group as usual.
//!
//! # Example
//!
//! ```
//! use shunt::translate;
//!
//! let postfix = translate("(3+4)*5")?;
//! assert_eq!(postfix.to_string(), "34+5*");
//! # Ok::<(), shunt::TranslateError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/shunt")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod repl;
pub mod translator;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use translator::{translate, Postfix, TranslateError, Translator};

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "Shunt";

use std::fs;
use std::path::Path;

/// One translated line of a batch file
#[derive(Debug)]
pub struct LineTranslation {
    /// The infix expression as it appeared in the file
    pub infix: String,
    /// The translation result for that line
    pub postfix: Result<Postfix, TranslateError>,
}

/// Translate every line of a text file
///
/// Each line is one independent expression; results come back in file
/// order with no cross-line state. A line that fails to translate carries
/// its error instead of aborting the rest of the file.
///
/// # Example
///
/// ```no_run
/// use shunt::{translate_file, Result};
/// use std::path::Path;
///
/// fn main() -> Result<()> {
///     for line in translate_file(Path::new("expressions.txt"))? {
///         match line.postfix {
///             Ok(postfix) => println!("{} -> {}", line.infix, postfix),
///             Err(e) => eprintln!("{}: {}", line.infix, e),
///         }
///     }
///     Ok(())
/// }
/// ```
pub fn translate_file(path: &Path) -> Result<Vec<LineTranslation>> {
    translate_file_with(&Translator::new(), path)
}

/// Translate every line of a text file with a configured translator
pub fn translate_file_with(translator: &Translator, path: &Path) -> Result<Vec<LineTranslation>> {
    debug!("reading expressions from {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!("translating {} lines", source.lines().count());
    Ok(source
        .lines()
        .map(|line| LineTranslation {
            infix: line.to_string(),
            postfix: translator.translate(line),
        })
        .collect())
}
