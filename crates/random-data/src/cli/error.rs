//! Error types for the command-line front end.

use thiserror::Error;

use crate::error::LexiconError;

/// Errors surfaced while configuring or running a generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment or files.
    #[error("configuration error: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// The requested output kind is not recognised.
    #[error("unknown output kind '{value}'; expected one of: {expected}", expected = crate::cli::OutputKind::NAMES.join(", "))]
    UnknownKind {
        /// Kind that was not recognised.
        value: String,
    },
    /// A record could not be serialised.
    #[error("failed to serialise record: {message}")]
    Serialize {
        /// Serialiser error message.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write output: {message}")]
    Write {
        /// I/O error message.
        message: String,
    },
    /// The lexicon could not be loaded.
    #[error("lexicon error: {source}")]
    Lexicon {
        /// Underlying lexicon error.
        #[from]
        #[source]
        source: LexiconError,
    },
}
