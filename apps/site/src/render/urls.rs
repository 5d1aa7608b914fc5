//! Third-party collaborator URLs built from document fields.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query-component set: everything percent-encoded except ASCII
/// alphanumerics and the unreserved marks, so decoding a parameter
/// reproduces the original value exactly.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// QR-code image for the portfolio link, served by a third-party generator.
pub fn qr_image_url(portfolio: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=120x120&data={}",
        utf8_percent_encode(portfolio, COMPONENT)
    )
}

/// Map search for the location string.
pub fn maps_search_url(location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(location, COMPONENT)
    )
}
