use super::suboption::MAX_VALUE_LEN;
use std::{fmt, io};

/// Problems found in a single line of the sub-options file.
#[derive(PartialEq, Clone, Debug)]
pub enum LineError {
    MissingNumber,
    NumberOutOfRange(String),
    ValueTooLong { number: u8, len: usize },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNumber => {
                write!(f, "SUBOPTION must be followed by a decimal number")
            }
            Self::NumberOutOfRange(n) => {
                write!(f, "Suboption number {} must be between 0 and 255", n)
            }
            Self::ValueTooLong { number, len } => write!(
                f,
                "Value of suboption {} is {} bytes long, maximum is {}",
                number, len, MAX_VALUE_LEN
            ),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Syntax { line: usize, source: LineError },
    PayloadTooLong(usize),
}

impl Error {
    /// Errors caused by the file contents rather than by reading it.
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Io(_) => false,
            Self::Syntax { .. } | Self::PayloadTooLong(_) => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Unable to read suboptions: {}", e),
            Self::Syntax { line, source } => {
                write!(f, "Syntax error in line {}: {}", line, source)
            }
            Self::PayloadTooLong(len) => write!(
                f,
                "Option 43 would be {} bytes long, maximum is 255",
                len
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
