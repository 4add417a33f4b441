use chrono::NaiveTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from config.toml. Every field has a default so a
/// partial file loads cleanly; structural checks that serde can't
/// express live in [`Config::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name used in the "Hi {recipient}," greeting.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    /// Optional logo embedded (base64) into preview signatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    /// Task types offered besides the implicit "Normal".
    #[serde(default = "default_task_types")]
    pub task_types: Vec<String>,
    /// Main project → its sub-projects, in configured order.
    #[serde(default)]
    pub projects: IndexMap<String, Vec<String>>,
    /// Label → hex color ("#rrggbb").
    #[serde(default)]
    pub labels: IndexMap<String, String>,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub signature: SignatureConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recipient: default_recipient(),
            logo_path: None,
            task_types: default_task_types(),
            projects: IndexMap::new(),
            labels: IndexMap::new(),
            email: EmailConfig::default(),
            signature: SignatureConfig::default(),
            notify: NotifyConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

fn default_recipient() -> String {
    "Team".to_string()
}

fn default_task_types() -> Vec<String> {
    vec!["Dev".to_string(), "Bugfix".to_string(), "Test".to_string()]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Primary recipient address(es), passed through verbatim.
    #[serde(default)]
    pub to: String,
    /// Zero or more CC addresses separated by ',' or ';'.
    #[serde(default)]
    pub cc: String,
}

impl EmailConfig {
    /// CC addresses split on ',' and ';', trimmed, empties dropped.
    pub fn cc_list(&self) -> Vec<String> {
        self.cc
            .split(&[',', ';'][..])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Fields of the signature block. Only `name`, `mobile` and `email` were
/// ever user-settable in older versions; the company lines were fixed
/// text and are config here. Empty fields drop their line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub office: String,
    /// Full URL; the link text drops the scheme.
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// 24-hour "HH:MM" reminder time.
    #[serde(default = "default_notify_time")]
    pub time: String,
}

impl NotifyConfig {
    pub fn parsed_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            time: default_notify_time(),
        }
    }
}

fn default_notify_time() -> String {
    "18:00".to_string()
}

/// Argv vectors for the two mail-client automation surfaces. An empty
/// vector means that client is unavailable and its dispatch stage is
/// skipped as a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default)]
    pub client_new: Vec<String>,
    #[serde(default)]
    pub client_classic: Vec<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("label '{label}' has malformed color '{color}' (expected #rrggbb)")]
    BadLabelColor { label: String, color: String },
    #[error("malformed notify time '{0}' (expected 24-hour HH:MM)")]
    BadNotifyTime(String),
    #[error("task type 'Normal' is reserved")]
    ReservedTaskType,
}

impl Config {
    /// Run after every load; a bad value is a hard error, not a default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, color) in &self.labels {
            if !is_hex_color(color) {
                return Err(ConfigError::BadLabelColor {
                    label: label.clone(),
                    color: color.clone(),
                });
            }
        }
        if self.notify.parsed_time().is_none() {
            return Err(ConfigError::BadNotifyTime(self.notify.time.clone()));
        }
        if self
            .task_types
            .iter()
            .any(|t| t == crate::model::task::TASK_TYPE_NORMAL)
        {
            return Err(ConfigError::ReservedTaskType);
        }
        Ok(())
    }

    /// Sub-projects configured under a main project, if it exists.
    pub fn sub_projects(&self, main: &str) -> Option<&[String]> {
        self.projects.get(main).map(Vec::as_slice)
    }

    pub fn label_color(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_loads_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.recipient, "Team");
        assert_eq!(cfg.task_types, vec!["Dev", "Bugfix", "Test"]);
        assert_eq!(cfg.notify.time, "18:00");
        assert!(cfg.projects.is_empty());
        assert!(cfg.logo_path.is_none());
        assert!(cfg.mail.client_new.is_empty());
        cfg.validate().unwrap();
    }

    #[test]
    fn test_projects_preserve_configured_order() {
        let cfg: Config = toml::from_str(
            r#"
            [projects]
            Zeta = ["Z1"]
            Alpha = ["API", "UI"]
            Mid = ["M"]
            "#,
        )
        .unwrap();
        let mains: Vec<&String> = cfg.projects.keys().collect();
        assert_eq!(mains, ["Zeta", "Alpha", "Mid"]);
        assert_eq!(cfg.sub_projects("Alpha").unwrap(), ["API", "UI"]);
        assert!(cfg.sub_projects("Gone").is_none());
    }

    #[test]
    fn test_cc_list_splits_on_both_separators() {
        let email = EmailConfig {
            to: "a@x.com".into(),
            cc: " b@x.com ,c@x.com; d@x.com;;".into(),
        };
        assert_eq!(email.cc_list(), ["b@x.com", "c@x.com", "d@x.com"]);
        assert!(EmailConfig::default().cc_list().is_empty());
    }

    #[test]
    fn test_malformed_label_color_is_rejected() {
        let cfg: Config = toml::from_str(
            r#"
            [labels]
            Call = "red"
            "#,
        )
        .unwrap();
        let result = cfg.validate();
        assert!(matches!(
            result,
            Err(ConfigError::BadLabelColor { ref label, ref color })
                if label == "Call" && color == "red"
        ));
    }

    #[test]
    fn test_malformed_notify_time_is_rejected() {
        let cfg: Config = toml::from_str("[notify]\ntime = \"25:99\"").unwrap();
        let result = cfg.validate();
        assert!(matches!(result, Err(ConfigError::BadNotifyTime(ref t)) if t == "25:99"));
    }

    #[test]
    fn test_reserved_task_type_is_rejected() {
        let cfg: Config = toml::from_str("task_types = [\"Dev\", \"Normal\"]").unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::ReservedTaskType)));
    }
}
