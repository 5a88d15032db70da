//! Event-source ingestion errors.

/// Errors raised while reading a delimited event file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("event file does not exist: {path}")]
    FileNotFound { path: String },

    #[error("failed to read event file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported delimiter '{value}': allowed delimiters are ',', ';', or '\\t'")]
    UnsupportedDelimiter { value: String },

    #[error("malformed event in {path} at line {line}: {message}")]
    MalformedLine {
        path: String,
        line: usize,
        message: String,
    },

    #[error("no events to read from {path}")]
    NoEvents { path: String },
}
