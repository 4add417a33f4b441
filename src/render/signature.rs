use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::model::config::Config;

/// Which variant of the signature block to produce.
///
/// Preview carries the embedded logo and a closing "Thanks," line;
/// Standard (file export, mail-client body) carries neither. Clipboard
/// copies don't call this at all, so pasted content never duplicates the
/// signature the mail client adds on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMode {
    Preview,
    Standard,
}

/// Render the signature block for concatenation before `</body>`.
/// Empty config fields drop their line. A configured but unreadable
/// logo is logged and omitted, never an error.
pub fn render_signature(config: &Config, mode: SignatureMode) -> String {
    let sig = &config.signature;
    let mut lines: Vec<String> = Vec::new();
    if !sig.name.is_empty() {
        lines.push(format!("<b>{}</b>", sig.name));
    }
    if mode == SignatureMode::Preview {
        if let Some(logo) = logo_data(config) {
            lines.push(format!(
                "<img src=\"data:image/png;base64,{}\" style=\"height:40px;\">",
                logo
            ));
        }
    }
    if !sig.company.is_empty() {
        lines.push(sig.company.clone());
    }
    if !sig.address.is_empty() {
        lines.push(sig.address.clone());
    }
    if !sig.mobile.is_empty() {
        lines.push(format!("Mobile: {}", sig.mobile));
    }
    if !sig.office.is_empty() {
        lines.push(format!("Office: {}", sig.office));
    }
    if !sig.email.is_empty() {
        lines.push(format!("<a href=\"mailto:{0}\">{0}</a>", sig.email));
    }
    if !sig.website.is_empty() {
        lines.push(format!(
            "<a href=\"{}\">{}</a>",
            sig.website,
            website_display(&sig.website)
        ));
    }

    let mut block = String::new();
    if mode == SignatureMode::Preview {
        block.push_str("<p>Thanks,</p>");
    }
    block.push_str("<p><br>--<br>Thanks & Regards,");
    for line in &lines {
        block.push_str("<br>");
        block.push_str(line);
    }
    block.push_str("</p>");
    block
}

/// Link text for the website line: the URL without its scheme.
fn website_display(url: &str) -> &str {
    url.trim_start_matches("https://").trim_start_matches("http://")
}

fn logo_data(config: &Config) -> Option<String> {
    let path = config.logo_path.as_ref()?;
    match std::fs::read(path) {
        Ok(bytes) => Some(STANDARD.encode(bytes)),
        Err(e) => {
            log::warn!("could not read logo {}: {}", path, e);
            None
        }
    }
}
