//! # funcspan
//!
//! Extracts top-level function and method declarations from a single
//! C-family source file, reporting each declaration's name and its
//! start/end line numbers within that file.
//!
//! Parsing is delegated to the ast-grep/tree-sitter stack; this crate
//! drives one parse per call (from disk or from an in-memory override
//! buffer), walks the resulting tree, and collects matches into a
//! [`FunctionList`]. Declaration subtrees are never descended into, so
//! lambdas and locally nested functions are not reported.
//!
//! ```no_run
//! let decls = funcspan::extract_functions("src/util.c", None)?;
//! for decl in &decls {
//!     println!("{decl}");
//! }
//! # Ok::<(), funcspan::ExtractError>(())
//! ```

pub mod error;
pub mod parser;
pub mod types;
mod walker;

pub use error::ExtractError;
pub use parser::{detect_language, extract_functions};
pub use types::{FunctionDecl, FunctionList};
