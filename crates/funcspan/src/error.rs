//! Error types for function extraction.

/// Errors that can occur while driving a parse.
///
/// Everything below the driver resolves locally during the walk: an
/// unnameable declaration yields an empty name and a node that cannot
/// be attributed to the target file is filtered out, neither is an
/// error. Either a (possibly empty) [`crate::FunctionList`] comes back,
/// or one of these does.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No grammar could be selected for the file, so a parser for it
    /// cannot be created.
    #[error("no parser available for {0}")]
    ParserUnavailable(String),

    /// The target file could not be read for parsing.
    #[error("failed to parse {path}")]
    ParseFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
