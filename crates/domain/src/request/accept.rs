//! Accept header formats.

/// Response format requested through the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptFormat {
    /// `application/json`
    Json,
    /// `application/xml`, answered with an XML rendering of the booking.
    Xml,
    /// `text/plain`, which the booking API refuses with 418.
    Text,
}

impl AcceptFormat {
    /// Returns the MIME type sent in the `Accept` header.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Text => "text/plain",
        }
    }
}
