//! Default listening ports for an HTTP server

/// Plain HTTP
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP over TLS
pub const SECURE_PORT: u16 = 8443;

pub fn default_port() -> u16 {
    DEFAULT_PORT
}

pub fn secure_port() -> u16 {
    SECURE_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports() {
        assert_eq!(default_port(), 8080);
        assert_eq!(secure_port(), 8443);
    }
}
