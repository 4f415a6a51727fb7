//! HTTP header field names
//!
//! Every header has a symbolic identifier (the [`HeaderName`] variant) and the literal string
//! sent on the wire. Wire names use the conventional casing; HTTP itself treats them
//! case-insensitively, but no case folding happens here.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which part of an exchange a header usually appears in
///
/// This is a grouping only. Nothing stops a request from carrying a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    General,
    Request,
    Response,
}

impl HeaderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

macro_rules! header_names {
    ($(
        $kind:ident {
            $($(#[$meta:meta])* $variant:ident $const_name:ident $wire:literal),* $(,)?
        }
    )*) => {
        paste::paste! {
            $($(
                #[doc = "Wire name of [`HeaderName::" $variant "`]"]
                pub const $const_name: &str = $wire;
            )*)*
        }

        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HeaderName {
            $($(
                $(#[$meta])*
                $variant,
            )*)*
        }

        impl HeaderName {
            /// Every header in the table, general headers first, then request and response headers
            pub const ALL: &'static [HeaderName] = &[$($(Self::$variant),*),*];

            /// The literal string sent on the wire, e.g. `"Content-Type"`
            pub fn wire_name(&self) -> &'static str {
                match self {
                    $($(Self::$variant => $const_name,)*)*
                }
            }

            /// The symbolic name of the header, e.g. `"ContentType"`
            pub fn identifier(&self) -> &'static str {
                match self {
                    $($(Self::$variant => stringify!($variant),)*)*
                }
            }

            pub fn kind(&self) -> HeaderKind {
                match self {
                    $($(Self::$variant => HeaderKind::$kind,)*)*
                }
            }
        }
    };
}

header_names! {
    General {
        /// Placeholder entry. It is not a real header field and should not be sent.
        Header                          HEADER                              "Header",
        ContentType                     CONTENT_TYPE                        "Content-Type",
        Date                            DATE                                "Date",
        Pragma                          PRAGMA                              "Pragma",
        CacheControl                    CACHE_CONTROL                       "Cache-Control",
        Connection                      CONNECTION                          "Connection",
        ContentLength                   CONTENT_LENGTH                      "Content-Length",
        ContentMD5                      CONTENT_MD5                         "Content-MD5",
        Upgrade                         UPGRADE                             "Upgrade",
        Via                             VIA                                 "Via",
        Warning                         WARNING                             "Warning",
    }

    Request {
        Accept                          ACCEPT                              "Accept",
        AcceptCharset                   ACCEPT_CHARSET                      "Accept-Charset",
        AcceptDatetime                  ACCEPT_DATETIME                     "Accept-Datetime",
        AcceptEncoding                  ACCEPT_ENCODING                     "Accept-Encoding",
        AcceptLanguage                  ACCEPT_LANGUAGE                     "Accept-Language",
        AccessControlRequestMethod      ACCESS_CONTROL_REQUEST_METHOD       "Access-Control-Request-Method",
        AccessControlRequestHeaders     ACCESS_CONTROL_REQUEST_HEADERS      "Access-Control-Request-Headers",
        Authorization                   AUTHORIZATION                       "Authorization",
        Cookie                          COOKIE                              "Cookie",
        Expect                          EXPECT                              "Expect",
        Forwarded                       FORWARDED                           "Forwarded",
        From                            FROM                                "From",
        Host                            HOST                                "Host",
        IfMatch                         IF_MATCH                            "If-Match",
        IfModifiedSince                 IF_MODIFIED_SINCE                   "If-Modified-Since",
        IfNoneMatch                     IF_NONE_MATCH                       "If-None-Match",
        IfRange                         IF_RANGE                            "If-Range",
        IfUnmodifiedSince               IF_UNMODIFIED_SINCE                 "If-Unmodified-Since",
        MaxForwards                     MAX_FORWARDS                        "Max-Forwards",
        Origin                          ORIGIN                              "Origin",
        ProxyAuthorization              PROXY_AUTHORIZATION                 "Proxy-Authorization",
        Range                           RANGE                               "Range",
        Referer                         REFERER                             "Referer",
        /// Same header as [`HeaderName::Referer`], spelled correctly. The wire name keeps the
        /// historical `"Referer"` spelling.
        Referrer                        REFERRER                            "Referer",
        TE                              TE                                  "TE",
        UserAgent                       USER_AGENT                          "User-Agent",
    }

    Response {
        AccessControlAllowOrigin        ACCESS_CONTROL_ALLOW_ORIGIN         "Access-Control-Allow-Origin",
        AccessControlAllowCredentials   ACCESS_CONTROL_ALLOW_CREDENTIALS    "Access-Control-Allow-Credentials",
        AccessControlExposeHeaders      ACCESS_CONTROL_EXPOSE_HEADERS       "Access-Control-Expose-Headers",
        AccessControlMaxAge             ACCESS_CONTROL_MAX_AGE              "Access-Control-Max-Age",
        AccessControlAllowMethods       ACCESS_CONTROL_ALLOW_METHODS        "Access-Control-Allow-Methods",
        AccessControlAllowHeaders       ACCESS_CONTROL_ALLOW_HEADERS        "Access-Control-Allow-Headers",
        AcceptPatch                     ACCEPT_PATCH                        "Accept-Patch",
        AcceptRanges                    ACCEPT_RANGES                       "Accept-Ranges",
        Age                             AGE                                 "Age",
        Allow                           ALLOW                               "Allow",
        AltSvc                          ALT_SVC                             "Alt-Svc",
        ContentDisposition              CONTENT_DISPOSITION                 "Content-Disposition",
        ContentEncoding                 CONTENT_ENCODING                    "Content-Encoding",
        ContentLanguage                 CONTENT_LANGUAGE                    "Content-Language",
        ContentLocation                 CONTENT_LOCATION                    "Content-Location",
        ContentRange                    CONTENT_RANGE                       "Content-Range",
        DeltaBase                       DELTA_BASE                          "Delta-Base",
        ETag                            ETAG                                "ETag",
        Expires                         EXPIRES                             "Expires",
        IM                              IM                                  "IM",
        LastModified                    LAST_MODIFIED                       "Last-Modified",
        Link                            LINK                                "Link",
        Location                        LOCATION                            "Location",
        P3P                             P3P                                 "P3P",
        /// Carries the wire name `"Pragma"`, the same as [`HeaderName::Pragma`], not
        /// `"Proxy-Authenticate"`.
        ProxyAuthenticate               PROXY_AUTHENTICATE                  "Pragma",
        PublicKeyPins                   PUBLIC_KEY_PINS                     "Public-Key-Pins",
        RetryAfter                      RETRY_AFTER                         "Retry-After",
        Server                          SERVER                              "Server",
        SetCookie                       SET_COOKIE                          "Set-Cookie",
        StrictTransportSecurity         STRICT_TRANSPORT_SECURITY           "Strict-Transport-Security",
        Trailer                         TRAILER                             "Trailer",
        TransferEncoding                TRANSFER_ENCODING                   "Transfer-Encoding",
        Tk                              TK                                  "Tk",
        Vary                            VARY                                "Vary",
        WWWAuthenticate                 WWW_AUTHENTICATE                    "WWW-Authenticate",
        XFrameOptions                   X_FRAME_OPTIONS                     "X-Frame-Options",
    }
}

impl HeaderName {
    /// Resolves a symbolic identifier such as `"ContentType"`
    ///
    /// The identifier must match exactly. Wire names and other spellings are not identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedKey`] if no header in the table has that identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|header| header.identifier() == identifier)
            .ok_or_else(|| Error::undefined_header(identifier))
    }

    /// Returns the headers grouped under `kind`, in table order
    pub fn of_kind(kind: HeaderKind) -> impl Iterator<Item = HeaderName> {
        Self::ALL.iter().copied().filter(move |header| header.kind() == kind)
    }
}

/// Returns the wire name of the header with the given identifier
///
/// # Errors
///
/// Returns [`Error::UndefinedKey`] if the identifier is not in the table. There is no fallback.
pub fn wire_name_for(identifier: &str) -> Result<&'static str, Error> {
    HeaderName::from_identifier(identifier).map(|header| header.wire_name())
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_identifier(s)
    }
}

impl From<HeaderName> for &'static str {
    fn from(header: HeaderName) -> Self {
        header.wire_name()
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Key;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    #[test]
    fn group_sizes() {
        assert_eq!(HeaderName::of_kind(HeaderKind::General).count(), 11);
        assert_eq!(HeaderName::of_kind(HeaderKind::Request).count(), 26);
        assert_eq!(HeaderName::of_kind(HeaderKind::Response).count(), 36);
        assert_eq!(HeaderName::ALL.len(), 73);
    }

    #[test]
    fn wire_names() {
        assert_eq!(HeaderName::ContentType.wire_name(), "Content-Type");
        assert_eq!(HeaderName::AcceptCharset.wire_name(), "Accept-Charset");
        assert_eq!(HeaderName::WWWAuthenticate.wire_name(), "WWW-Authenticate");
        assert_eq!(HeaderName::Header.wire_name(), "Header");
        assert_eq!(wire_name_for("ContentType"), Ok("Content-Type"));
        assert_eq!(CONTENT_TYPE, "Content-Type");
    }

    #[test]
    fn referrer_is_an_alias() {
        assert_eq!(HeaderName::Referer.wire_name(), "Referer");
        assert_eq!(HeaderName::Referrer.wire_name(), "Referer");
        assert_eq!(wire_name_for("Referer"), wire_name_for("Referrer"));
        assert_eq!(REFERRER, REFERER);
        assert_ne!(HeaderName::Referer, HeaderName::Referrer);
    }

    #[test]
    fn proxy_authenticate_keeps_pragma_wire_name() {
        assert_eq!(HeaderName::ProxyAuthenticate.wire_name(), "Pragma");
        assert_eq!(wire_name_for("ProxyAuthenticate"), Ok("Pragma"));
        assert_eq!(PROXY_AUTHENTICATE, PRAGMA);
        assert_eq!(HeaderName::ProxyAuthenticate.kind(), HeaderKind::Response);
    }

    #[test]
    fn wire_names_are_unique_apart_from_known_collisions() {
        let mut by_wire_name: HashMap<&str, Vec<HeaderName>> = HashMap::new();
        for header in HeaderName::ALL {
            assert!(!header.wire_name().is_empty());
            by_wire_name
                .entry(header.wire_name())
                .or_default()
                .push(*header);
        }

        let mut collisions: Vec<_> = by_wire_name
            .into_values()
            .filter(|headers| headers.len() > 1)
            .collect();
        collisions.sort_by_key(|headers| headers[0].identifier());

        assert_eq!(
            collisions,
            vec![
                vec![HeaderName::Pragma, HeaderName::ProxyAuthenticate],
                vec![HeaderName::Referer, HeaderName::Referrer],
            ]
        );
    }

    #[test]
    fn identifiers_round_trip() {
        for header in HeaderName::ALL {
            assert_eq!(HeaderName::from_identifier(header.identifier()), Ok(*header));
        }
    }

    #[test]
    fn identifiers_must_match_exactly() {
        for spelling in [
            "content_type",
            "Content-Type",
            "CONTENT_TYPE",
            "content type",
            "contentType",
            "proxy-authenticate",
            "Proxy-Authenticate",
            "te",
            "Im",
            "Referrer ",
        ] {
            assert_matches!(
                wire_name_for(spelling),
                Err(Error::UndefinedKey(Key::Header(ref id))) if id == spelling,
                "{spelling:?} should not resolve"
            );
        }

        assert_eq!("ContentType".parse::<HeaderName>(), Ok(HeaderName::ContentType));
        assert_eq!(wire_name_for("TE"), Ok("TE"));
        assert_eq!(wire_name_for("IM"), Ok("IM"));
    }

    #[test]
    fn undefined_identifier() {
        assert_matches!(
            wire_name_for("XPoweredBy"),
            Err(Error::UndefinedKey(Key::Header(ref id))) if id == "XPoweredBy"
        );
        assert_matches!(
            HeaderName::from_identifier(""),
            Err(Error::UndefinedKey(Key::Header(_)))
        );
        assert_matches!(
            "Found".parse::<HeaderName>(),
            Err(Error::UndefinedKey(_))
        );
    }

    #[test]
    fn display() {
        assert_eq!(HeaderName::SetCookie.to_string(), "Set-Cookie");
        assert_eq!(HeaderKind::Request.to_string(), "request");
        let wire: &'static str = HeaderName::Host.into();
        assert_eq!(wire, "Host");
    }
}
