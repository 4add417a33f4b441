use std::sync::LazyLock;

use regex::Regex;

/// Everything one clipboard write carries: the raw HTML, its
/// clipboard-HTML wire encoding, and the plain-text fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardContent {
    pub html: String,
    pub cf_html: Vec<u8>,
    pub text: String,
}

impl ClipboardContent {
    pub fn from_html(html: String) -> Self {
        let cf_html = encode(&html);
        let text = text_fallback(&html);
        ClipboardContent { html, cf_html, text }
    }
}

/// Wrap an HTML payload in the clipboard-HTML wire format. All four
/// offsets are fixed-width 8-digit decimal BYTE positions in the final
/// buffer: StartHTML is 0, StartFragment is the header length, and both
/// End offsets are the total length. Fixed-width numbers keep the header
/// length independent of the payload, so the offsets never shift as they
/// are filled in.
pub fn encode(html: &str) -> Vec<u8> {
    // the header is pure ASCII, so its byte length is a constant
    let header_len = header(0, 0, 0, 0).len();
    let total = header_len + html.len();
    let mut buf = header(0, total, header_len, total).into_bytes();
    buf.extend_from_slice(html.as_bytes());
    buf
}

fn header(start_html: usize, end_html: usize, start_fragment: usize, end_fragment: usize) -> String {
    format!(
        "Version:0.9\r\nStartHTML:{:08}\r\nEndHTML:{:08}\r\nStartFragment:{:08}\r\nEndFragment:{:08}\r\n",
        start_html, end_html, start_fragment, end_fragment
    )
}

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Plain-text companion for a clipboard write. Structural tags become
/// newlines, every remaining tag is dropped, and the ends are trimmed.
pub fn text_fallback(html: &str) -> String {
    let mut text = html.to_string();
    for tag in ["<br>", "<p>", "</p>", "</li>"] {
        text = text.replace(tag, "\n");
    }
    TAG.replace_all(&text, "").trim().to_string()
}
