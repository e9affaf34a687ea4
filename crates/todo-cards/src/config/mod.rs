//! Configuration module for todo-cards.

use anyhow::{Context, Result, anyhow};
use std::io::{self, BufRead, Write};
use std::path::Path;

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Load and validate the keybindings, falling back to the defaults when no
/// configuration file exists.
pub fn load_keybindings(path: Option<&Path>) -> Result<KeyBindingsConfig> {
    match keybindings::load_config(path)? {
        Some(config) => {
            keybindings::validate_config(&config).context("invalid keybindings configuration")?;
            Ok(config.tui.keybindings)
        }
        None => Ok(KeyBindingsConfig::default()),
    }
}

/// Write the default configuration file.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("could not determine the configuration directory"))?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    write_default_config(&output_path, force, &mut stdin.lock(), &mut stdout.lock())
}

fn write_default_config<R: BufRead, W: Write>(path: &Path, force: bool, input: &mut R, out: &mut W) -> Result<()> {
    if path.exists() && !force && !confirm_overwrite(path, input, out)? {
        writeln!(out, "Aborted.")?;
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    writeln!(out, "Wrote default configuration to {}", path.display())?;
    writeln!(out, "Edit it to customize keybindings, then restart `todo-cards tui`.")?;
    Ok(())
}

fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "File already exists: {}\nOverwrite? [y/N]: ", path.display())?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
