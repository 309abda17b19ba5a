use tinter_core::config::{user_config_dir, CONFIG_FILENAMES};
use tinter_core::SolverConfig;

/// Write a starter `solver.yml` with the built-in defaults to `~/tinter/`.
///
/// Safe to run multiple times - an existing file is kept unless `force` is true.
pub fn cmd_init(force: bool) -> Result<(), String> {
    let tinter_dir = user_config_dir().ok_or("Could not determine home directory")?;

    println!(
        "Initializing tinter configuration in: {}",
        tinter_dir.display()
    );

    std::fs::create_dir_all(&tinter_dir)
        .map_err(|e| format!("Failed to create config directory: {}", e))?;

    let dst_config = tinter_dir.join(CONFIG_FILENAMES[0]);
    if dst_config.exists() && !force {
        println!(
            "  Skipped: {} (already exists, use --force to overwrite)",
            CONFIG_FILENAMES[0]
        );
        return Ok(());
    }

    let yaml = SolverConfig::default().to_yaml()?;
    std::fs::write(&dst_config, yaml)
        .map_err(|e| format!("Failed to write {}: {}", dst_config.display(), e))?;
    println!("  Wrote: {}", CONFIG_FILENAMES[0]);

    Ok(())
}
