//! Reference tables for HTTP: status codes, header field names and default ports.
//!
//! There is no I/O here, only immutable data and lookups over it, meant to be consumed by HTTP
//! client or server code.
//!
//! ```
//! use ihttp_constants::header::{self, HeaderName};
//! use ihttp_constants::status::{self, StatusCategory, StatusCode};
//! use ihttp_constants::port;
//!
//! assert_eq!(status::category(404), StatusCategory::ClientError);
//! assert!(status::exists(418));
//! assert!(!status::exists(302));
//! assert_eq!(StatusCode::from_u16(503).unwrap(), StatusCode::ServiceUnavailable);
//!
//! assert_eq!(HeaderName::ContentType.wire_name(), "Content-Type");
//! assert_eq!(header::wire_name_for("UserAgent").unwrap(), "User-Agent");
//! assert!(header::wire_name_for("NotAHeader").is_err());
//!
//! assert_eq!(port::default_port(), 8080);
//! ```
//!
//! # Status codes
//!
//! [`status::StatusCode`] lists the codes from 100 to 511 that the table knows about, plus a
//! `Unknown = 0` sentinel for "no status code". A code can be classified by its hundreds digit
//! with [`status::category`] whether or not it is in the table, while [`status::exists`] only
//! accepts codes that are.
//!
//! Notably, `302 Found` is *not* in the table.
//!
//! # Header field names
//!
//! [`header::HeaderName`] maps a symbolic identifier to the literal string used on the wire.
//! String identifiers can be resolved with [`header::wire_name_for`]; anything outside the table
//! is an [`Error::UndefinedKey`], never a guessed value.
//!
//! Two entries share a wire name with another entry:
//! - `Referrer` is an alias of `Referer`, and both are sent as `"Referer"`.
//! - `ProxyAuthenticate` is sent as `"Pragma"`. This is how the table has always been, so it is
//!   kept rather than silently changed.
//!
//! # Logging
//!
//! Failed lookups are reported at `debug` level through the [`log`](https://docs.rs/log) facade.
//! No logger is installed by this crate.

mod error;
pub mod header;
pub mod port;
pub mod status;

pub use error::{Error, Key};
pub use header::{HeaderKind, HeaderName};
pub use status::{StatusCategory, StatusCode};
