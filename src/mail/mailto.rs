use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set for mailto fields: RFC 3986 unreserved characters plus
/// `/` stay literal, everything else is percent-encoded.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

pub fn quote(s: &str) -> String {
    utf8_percent_encode(s, MAILTO_SET).to_string()
}

/// Build the mailto URL handed to the URI opener. The body parameter is
/// always empty: the formatted body travels on the clipboard and the
/// user pastes it into the draft.
pub fn mailto_url(to: &str, cc: &str, subject: &str) -> String {
    format!(
        "mailto:{}?cc={}&subject={}&body=",
        quote(to),
        quote(cc),
        quote(subject)
    )
}
