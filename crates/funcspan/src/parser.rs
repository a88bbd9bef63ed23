//! Extraction driver: one parse per call, from disk or from an
//! in-memory override buffer.

use std::borrow::Cow;

use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ExtractError;
use crate::types::FunctionList;
use crate::walker;

/// Initial slot count for a fresh result list.
const INITIAL_CAPACITY: usize = 10;

/// Select the grammar for a file from its extension.
///
/// Objective-C sources route through the C and C++ grammars; their
/// coverage is the C subset of those files. Returns `None` for
/// anything outside the C family.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "c" | "h" | "m" => Some(SupportLang::C),
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" | "mm" => Some(SupportLang::Cpp),
        _ => None,
    }
}

/// Extract the top-level function and method declarations of one file.
///
/// `file_path` names the file to analyze. With `contents` set, the
/// buffer is parsed in place of whatever is on disk at that path (the
/// unsaved-buffer case); with `None`, the file is read from disk. Each
/// call parses fresh, no state is shared across calls, and every
/// parser resource is released before returning. An empty list is a
/// successful outcome, not an error.
///
/// # Errors
/// [`ExtractError::ParserUnavailable`] when no grammar matches the
/// path, [`ExtractError::ParseFailed`] when the file cannot be read.
pub fn extract_functions(
    file_path: &str,
    contents: Option<&str>,
) -> Result<FunctionList, ExtractError> {
    let lang = detect_language(file_path)
        .ok_or_else(|| ExtractError::ParserUnavailable(file_path.to_string()))?;

    let source: Cow<'_, str> = match contents {
        Some(buffer) => Cow::Borrowed(buffer),
        None => {
            Cow::Owned(
                std::fs::read_to_string(file_path).map_err(|source| ExtractError::ParseFailed {
                    path: file_path.to_string(),
                    source,
                })?,
            )
        }
    };

    let root = lang.ast_grep(source.as_ref());
    let mut decls = FunctionList::with_capacity(INITIAL_CAPACITY);
    walker::collect(&root, file_path, &mut decls);
    tracing::debug!(
        path = file_path,
        count = decls.len(),
        "extracted declarations"
    );
    Ok(decls)
}
