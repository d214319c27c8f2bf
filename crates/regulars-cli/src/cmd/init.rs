use anyhow::Context;
use regulars_core::config::{Config, WarnLevel};
use regulars_core::{io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing regulars in: {}", root.display());

    for dir in [paths::REGULARS_DIR, paths::HOUSEHOLDS_DIR] {
        let p = root.join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
    }

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
    } else {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    }

    let config = Config::load(root).context("failed to load config.yaml")?;
    for w in config.validate() {
        let level = match w.level {
            WarnLevel::Error => "error",
            WarnLevel::Warning => "warning",
        };
        println!("  {level}: {}", w.message);
    }
    Ok(())
}
