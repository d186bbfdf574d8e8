use std::path::PathBuf;

use lexa_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default template to `~/lexa/config.json`, or to the path given
/// with `--config`. An existing file is never overwritten.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        match input {
            Some(path) => {
                Config::write_template(&path)?;
                println!("✅ Created config file at: {}", path.display());
            }
            None => {
                Config::create_config()?;
            }
        }
        Ok(())
    }
}
