use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Undefined key: {0}")]
    UndefinedKey(Key),
}

/// The table key a failed lookup asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    StatusCode(u16),
    Header(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusCode(code) => write!(f, "status code '{code}'"),
            Self::Header(identifier) => write!(f, "header field '{identifier}'"),
        }
    }
}

impl Error {
    pub(crate) fn undefined_status(code: u16) -> Self {
        log::debug!(key = code; "Status code lookup failed");
        Self::UndefinedKey(Key::StatusCode(code))
    }

    pub(crate) fn undefined_header(identifier: &str) -> Self {
        log::debug!(key = identifier; "Header field lookup failed");
        Self::UndefinedKey(Key::Header(identifier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        assert_eq!(
            Error::undefined_status(499).to_string(),
            "Undefined key: status code '499'"
        );
        assert_eq!(
            Error::undefined_header("XPoweredBy").to_string(),
            "Undefined key: header field 'XPoweredBy'"
        );
    }
}
