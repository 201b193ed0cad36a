use std::fs;
use std::path::Path;

use anyhow::{bail, Context as _};

use companion::color::{self, emoji};
use companion::config::Config;

/// Write a default config file to `path`.
pub fn cmd_init(path: &str, force: bool) -> anyhow::Result<()> {
    let path = Path::new(path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, Config::default_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "{} {}",
        emoji::CHECK,
        color::success(&format!("Wrote {}", path.display()))
    );
    Ok(())
}
