use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::paths;

const CONFIG_TOML_TEMPLATE: &str = r##"# eod configuration. Missing keys fall back to their defaults.

# Name used in the "Hi {recipient}," greeting.
recipient = "Team"

# Logo file embedded into the preview signature (PNG or JPEG).
# logo_path = "logo.png"

# Task types offered besides the implicit "Normal".
task_types = ["Dev", "Bugfix", "Test"]

# Main projects and their sub-projects. The generated mail keeps
# this order.
[projects]
# Alpha = ["API", "UI"]
# Beta = ["Core"]

# Labels and their highlight colors ("#rrggbb").
[labels]
# "Client Call" = "#aa00ff"

[email]
to = ""
cc = ""

# Signature block. Empty fields drop their line.
[signature]
name = ""
mobile = ""
email = ""
company = ""
address = ""
office = ""
website = ""

# 24-hour HH:MM reminder time, weekdays only.
[notify]
time = "18:00"

# External mail clients tried when the mailto handler fails. Each value
# is an argv; the draft travels as --subject, --to, --cc and
# --body-html <file> appended to it.
[mail]
# client_new = ["outlook-compose"]
# client_classic = ["outlook-compose", "--classic"]
"##;

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = super::data_dir();
    fs::create_dir_all(&dir)?;

    let config_path = paths::config_path(&dir);
    if config_path.exists() && !args.force {
        return Err(format!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        )
        .into());
    }

    fs::write(&config_path, CONFIG_TOML_TEMPLATE)?;
    println!("wrote {}", config_path.display());
    println!("edit it to add your projects, labels and addresses");
    Ok(())
}
