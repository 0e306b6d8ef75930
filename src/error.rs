use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FetcherError {
    NetworkError(String),
    ParseError(String),
    StatusError { url: String, status: u16 },
    IoError(io::Error),
}

impl fmt::Display for FetcherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetcherError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            FetcherError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            FetcherError::StatusError { url, status } => {
                write!(f, "Request to {} returned status {}", url, status)
            }
            FetcherError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for FetcherError {}

impl From<io::Error> for FetcherError {
    fn from(err: io::Error) -> Self {
        FetcherError::IoError(err)
    }
}
