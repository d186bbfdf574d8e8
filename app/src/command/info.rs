use std::path::PathBuf;

use lexa_config::Config;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    /// Explicit config path, if one was given
    pub config_path: Option<PathBuf>,
}

/// Strategy for displaying configuration information.
///
/// Prints the effective configuration, i.e. the file contents merged over
/// defaults, along with where it was read from.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let path = Config::resolve_path(input.config_path.as_deref())?;
        let config = Config::load_or_default(Some(&path))?;

        println!("=== lexa Configuration ===\n");

        println!("Config File:");
        if path.exists() {
            println!("  Path: {}", path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", path.display());
        }
        println!();

        println!("Server:");
        println!("  Bind Address: {}", config.server.bind_addr());
        println!(
            "  CORS: {}",
            if config.server.cors_enabled {
                "enabled (any origin)"
            } else {
                "disabled"
            }
        );
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            println!("  RUST_LOG: {rust_log} (overrides level)");
        }

        Ok(())
    }
}
