use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus CLI overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        print!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file in `editor`, then in $EDITOR/$VISUAL or the
    /// platform default if that one fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or(default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }

        if editor_to_use != default_editor {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            if run_editor(&default_editor, path) {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit configuration file with '{editor_to_use}'"
        )))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
