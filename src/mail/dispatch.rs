use std::io::Write as _;
use std::process::Command;

use crate::mail::cf_html::ClipboardContent;
use crate::mail::clipboard::{ClipboardError, ClipboardSink};
use crate::mail::mailto::mailto_url;
use crate::model::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(
        "no mail client could be opened: {last}; the formatted body is on the clipboard, paste it manually"
    )]
    AllStagesFailed { last: String },
}

#[derive(Debug, thiserror::Error)]
pub enum MailClientError {
    #[error("no command configured")]
    NotConfigured,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("command exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Everything one send needs: addressing, the full body for the client
/// stages, and the signature-less clipboard content. `cc` is the raw
/// configured form (used in the mailto URL); `cc_list` is the split
/// form the client stages re-join with `;`.
#[derive(Debug, Clone)]
pub struct MailRequest {
    pub subject: String,
    pub to: String,
    pub cc: String,
    pub cc_list: Vec<String>,
    pub full_html: String,
    pub clipboard: ClipboardContent,
}

impl MailRequest {
    pub fn new(subject: String, config: &Config, full_html: String, body_html: String) -> Self {
        MailRequest {
            subject,
            to: config.email.to.trim().to_string(),
            cc: config.email.cc.trim().to_string(),
            cc_list: config.email.cc_list(),
            full_html,
            clipboard: ClipboardContent::from_html(body_html),
        }
    }
}

/// Which stage ended the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Mailto,
    NewClient,
    ClassicClient,
}

pub trait UriOpener {
    fn open(&mut self, uri: &str) -> std::io::Result<()>;
}

/// Platform URI handler via the `open` crate.
pub struct SystemOpener;

impl UriOpener for SystemOpener {
    fn open(&mut self, uri: &str) -> std::io::Result<()> {
        open::that(uri)
    }
}

/// A mail-client automation surface that can create and display a draft.
pub trait MailClient {
    fn name(&self) -> &str;
    fn compose(&mut self, subject: &str, to: &str, cc: &str, html_body: &str)
        -> Result<(), MailClientError>;
}

/// Configured external command. The draft fields travel as arguments
/// and the HTML body as a file; the file is kept on disk because the
/// client may read it after we exit.
pub struct ExternalMailClient {
    name: &'static str,
    argv: Vec<String>,
}

impl ExternalMailClient {
    pub fn new_client(config: &Config) -> Self {
        ExternalMailClient {
            name: "new",
            argv: config.mail.client_new.clone(),
        }
    }

    pub fn classic_client(config: &Config) -> Self {
        ExternalMailClient {
            name: "classic",
            argv: config.mail.client_classic.clone(),
        }
    }
}

impl MailClient for ExternalMailClient {
    fn name(&self) -> &str {
        self.name
    }

    fn compose(
        &mut self,
        subject: &str,
        to: &str,
        cc: &str,
        html_body: &str,
    ) -> Result<(), MailClientError> {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(MailClientError::NotConfigured);
        };
        let mut body_file = tempfile::Builder::new().suffix(".html").tempfile()?;
        body_file.write_all(html_body.as_bytes())?;
        let (_, body_path) = body_file.keep().map_err(|e| e.error)?;
        let status = Command::new(program)
            .args(args)
            .arg("--subject")
            .arg(subject)
            .arg("--to")
            .arg(to)
            .arg("--cc")
            .arg(cc)
            .arg("--body-html")
            .arg(&body_path)
            .status()?;
        if !status.success() {
            return Err(MailClientError::Failed(status));
        }
        Ok(())
    }
}

/// Run the delivery chain. The signature-less body goes to the clipboard
/// first (a failure there is a hard error, since the clipboard is also
/// the user's manual fallback), then mailto, then the "new" client, then
/// the "classic" client. The first success is terminal; stage failures
/// are logged and swallowed.
pub fn dispatch(
    request: &MailRequest,
    clipboard: &mut dyn ClipboardSink,
    opener: &mut dyn UriOpener,
    new_client: &mut dyn MailClient,
    classic_client: &mut dyn MailClient,
) -> Result<DispatchOutcome, DispatchError> {
    clipboard.write(&request.clipboard)?;
    if request.cc.is_empty() {
        log::warn!("no cc addresses configured, proceeding with to only");
    }

    let url = mailto_url(&request.to, &request.cc, &request.subject);
    log::info!(
        "opening mail client: to={}, cc={}, subject={}, url={}",
        request.to,
        request.cc,
        request.subject,
        url
    );
    match opener.open(&url) {
        Ok(()) => return Ok(DispatchOutcome::Mailto),
        Err(e) => log::info!("mailto open failed: {}", e),
    }

    let cc_joined = request.cc_list.join(";");
    match new_client.compose(&request.subject, &request.to, &cc_joined, &request.full_html) {
        Ok(()) => return Ok(DispatchOutcome::NewClient),
        Err(e) => log::info!("{} mail client failed: {}", new_client.name(), e),
    }
    match classic_client.compose(&request.subject, &request.to, &cc_joined, &request.full_html) {
        Ok(()) => Ok(DispatchOutcome::ClassicClient),
        Err(e) => {
            log::info!("{} mail client failed: {}", classic_client.name(), e);
            Err(DispatchError::AllStagesFailed {
                last: e.to_string(),
            })
        }
    }
}
