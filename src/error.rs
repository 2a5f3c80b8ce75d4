use std::fmt;

#[derive(Debug)]
pub enum Error {
    Transport(String),
    NotFound(String),
    Validation(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "Transport error: {msg}"),
            Error::NotFound(msg) => write!(f, "Not found: {msg}"),
            Error::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}
