use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use timeblock_core::PlannerConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show {
        /// Configuration file (TOML); defaults apply when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(long)]
        file: PathBuf,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show { file } => {
            let config = match file {
                Some(path) => PlannerConfig::from_toml_str(&fs::read_to_string(path)?)?,
                None => PlannerConfig::default(),
            };
            print!("{}", config.to_toml_string()?);
        }
        ConfigAction::Init { file } => {
            let config = PlannerConfig::default();
            fs::write(&file, config.to_toml_string()?)?;
            println!("wrote {}", file.display());
        }
    }
    Ok(())
}
