use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    Export(Export),
}

impl Run {
    pub async fn run(self) -> Result<ExitCode> {
        use Command::*;
        match self.command {
            Export(export) => export.run().await,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Export {
    /// The file the openapi document should be exported to
    #[arg(long, env)]
    pub file: PathBuf,
}

impl Export {
    pub async fn run(self) -> Result<ExitCode> {
        if self.file.file_name().is_none() {
            return Err(anyhow!("Invalid file name"));
        }

        let doc = tprm_server::openapi::openapi().to_pretty_json()?;
        fs::write(self.file, doc)?;

        Ok(ExitCode::SUCCESS)
    }
}
