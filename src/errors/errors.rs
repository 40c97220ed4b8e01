use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("unknown lexer state: {state:?}")]
    UnknownState { state: String },
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern { pattern: String, source: regex::Error },
}
