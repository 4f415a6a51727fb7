//! HTTP status codes
//!
//! The table follows the IANA
//! [status code registry](https://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml)
//! with [RFC 7231](https://tools.ietf.org/html/rfc7231) as the base reference.
//! Codes with their own references carry them in [`StatusCode::rfcs`].
//!
//! `302 Found` is not part of the table.

use crate::error::Error;
use std::fmt;

/// The class of a status code, given by its hundreds digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Outside of `100..=599`, including the [`StatusCode::Unknown`] sentinel.
    Unknown,
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusCategory {
    /// Classifies any integer by its hundreds digit.
    ///
    /// The code does not need to be in the table: `499` is a [`StatusCategory::ClientError`].
    pub fn of(code: u16) -> Self {
        match code {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Informational => "informational",
            Self::Success => "success",
            Self::Redirection => "redirection",
            Self::ClientError => "client-error",
            Self::ServerError => "server-error",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returns the category of `code`
pub fn category(code: u16) -> StatusCategory {
    StatusCategory::of(code)
}

/// Returns `true` if `code` is one of the codes in the table
///
/// Being in range is not enough: `499` is not in the table, and neither is the `0` sentinel.
pub fn exists(code: u16) -> bool {
    matches!(StatusCode::lookup(code), Some(status) if status != StatusCode::Unknown)
}

macro_rules! status_codes {
    ($($variant:ident $const_name:ident $value:literal $($rfc:literal)*),* $(,)?) => {
        $(
            pub const $const_name: u16 = $value;
        )*

        /// A status code from the table
        ///
        /// Converts to its numeric value with `u16::from` (or `as u16`) and back with
        /// [`StatusCode::from_u16`].
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum StatusCode {
            /// No status code was available or parsed
            Unknown = 0,
            $(
                #[doc = concat!("`", stringify!($value), "` ", stringify!($variant))]
                $variant = $value,
            )*
        }

        impl StatusCode {
            /// Every code in the table, in ascending order. The sentinel is not included.
            pub const ALL: &'static [StatusCode] = &[$(Self::$variant),*];

            fn lookup(code: u16) -> Option<Self> {
                match code {
                    0 => Some(Self::Unknown),
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The symbolic name of the code, e.g. `"NotFound"`
            pub fn identifier(&self) -> &'static str {
                match self {
                    Self::Unknown => "Unknown",
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Every RFC the table cites for the code, in citation order
            pub fn rfcs(&self) -> &'static [&'static str] {
                match self {
                    Self::Unknown => &[],
                    $(Self::$variant => &[$($rfc),*],)*
                }
            }
        }
    };
}

pub const UNKNOWN: u16 = 0;

status_codes! {
    // 1xx
    Continue                        CONTINUE                            100,
    SwitchingProtocols              SWITCHING_PROTOCOLS                 101,
    Processing                      PROCESSING                          102 "RFC 2518",
    EarlyHints                      EARLY_HINTS                         103 "RFC 8297",

    // 2xx
    OK                              OK                                  200,
    Created                         CREATED                             201,
    Accepted                        ACCEPTED                            202,
    NonAuthoritativeInformation     NON_AUTHORITATIVE_INFORMATION       203,
    NoContent                       NO_CONTENT                          204,
    ResetContent                    RESET_CONTENT                       205,
    PartialContent                  PARTIAL_CONTENT                     206 "RFC 7233",
    MultiStatus                     MULTI_STATUS                        207 "RFC 4918",
    AlreadyReported                 ALREADY_REPORTED                    208 "RFC 5842",
    IMUsed                          IM_USED                             226 "RFC 3229",

    // 3xx
    MultipleChoices                 MULTIPLE_CHOICES                    300,
    MovedPermanently                MOVED_PERMANENTLY                   301,
    SeeOther                        SEE_OTHER                           303,
    NotModified                     NOT_MODIFIED                        304 "RFC 7232",
    UseProxy                        USE_PROXY                           305,
    SwitchProxy                     SWITCH_PROXY                        306,
    TemporaryRedirect               TEMPORARY_REDIRECT                  307,
    PermanentRedirect               PERMANENT_REDIRECT                  308 "RFC 7538",

    // 4xx
    BadRequest                      BAD_REQUEST                         400,
    Unauthorized                    UNAUTHORIZED                        401,
    PaymentRequired                 PAYMENT_REQUIRED                    402,
    Forbidden                       FORBIDDEN                           403,
    NotFound                        NOT_FOUND                           404,
    MethodNotAllowed                METHOD_NOT_ALLOWED                  405,
    NotAcceptable                   NOT_ACCEPTABLE                      406,
    ProxyAuthenticationRequired     PROXY_AUTHENTICATION_REQUIRED       407 "RFC 7235",
    RequestTimeout                  REQUEST_TIMEOUT                     408,
    Conflict                        CONFLICT                            409,
    Gone                            GONE                                410,
    LengthRequired                  LENGTH_REQUIRED                     411,
    PreconditionFailed              PRECONDITION_FAILED                 412 "RFC 7232",
    PayloadTooLarge                 PAYLOAD_TOO_LARGE                   413 "RFC 7231",
    URITooLong                      URI_TOO_LONG                        414,
    UnsupportedMediaType            UNSUPPORTED_MEDIA_TYPE              415,
    RangeNotSatisfiable             RANGE_NOT_SATISFIABLE               416 "RFC 7233",
    ExpectationFailed               EXPECTATION_FAILED                  417,
    ImATeapot                       IM_A_TEAPOT                         418 "RFC 2324" "RFC 7168",
    MisdirectedRequest              MISDIRECTED_REQUEST                 421 "RFC 7540",
    UnprocessableEntity             UNPROCESSABLE_ENTITY                422 "RFC 4918",
    Locked                          LOCKED                              423,
    FailedDependency                FAILED_DEPENDENCY                   424,
    TooEarly                        TOO_EARLY                           425 "RFC 8470",
    UpgradeRequired                 UPGRADE_REQUIRED                    426,
    PreconditionRequired            PRECONDITION_REQUIRED               428 "RFC 6585",
    TooManyRequests                 TOO_MANY_REQUESTS                   429,
    RequestHeaderFieldsTooLarge     REQUEST_HEADER_FIELDS_TOO_LARGE     431,
    UnavailableForLegalReasons      UNAVAILABLE_FOR_LEGAL_REASONS       451 "RFC 7725",

    // 5xx
    InternalServerError             INTERNAL_SERVER_ERROR               500,
    NotImplemented                  NOT_IMPLEMENTED                     501,
    BadGateway                      BAD_GATEWAY                         502,
    ServiceUnavailable              SERVICE_UNAVAILABLE                 503,
    GatewayTimeout                  GATEWAY_TIMEOUT                     504,
    HTTPVersionNotSupported         HTTP_VERSION_NOT_SUPPORTED          505,
    VariantAlsoNegotiates           VARIANT_ALSO_NEGOTIATES             506 "RFC 2295",
    InsufficientStorage             INSUFFICIENT_STORAGE                507 "RFC 4918",
    LoopDetected                    LOOP_DETECTED                       508 "RFC 5842",
    NotExtended                     NOT_EXTENDED                        510 "RFC 2774",
    NetworkAuthenticationRequired   NETWORK_AUTHENTICATION_REQUIRED     511 "RFC 6585",
}

// Generates one `is_<category>` predicate per category
macro_rules! category_predicates {
    ($($category:ident),*) => {
        paste::paste! {
            $(
                #[doc = "Returns `true` if this is a [`StatusCategory::" $category "`] code"]
                pub fn [<is_ $category:snake>](&self) -> bool {
                    self.category() == StatusCategory::$category
                }
            )*
        }
    };
}

impl StatusCode {
    /// Returns the table entry for `code`
    ///
    /// `0` resolves to [`StatusCode::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedKey`] if `code` is not in the table.
    pub fn from_u16(code: u16) -> Result<Self, Error> {
        Self::lookup(code).ok_or_else(|| Error::undefined_status(code))
    }

    /// The first RFC the table cites for the code, if any
    pub fn rfc(&self) -> Option<&'static str> {
        self.rfcs().first().copied()
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::of(self.code())
    }

    category_predicates!(Informational, Success, Redirection, ClientError, ServerError);
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Error> {
        Self::from_u16(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
