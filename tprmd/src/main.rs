use clap::Parser;
use std::process::{ExitCode, Termination};
use tracing_subscriber::EnvFilter;

mod openapi;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Export the OpenAPI document
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "tprmd",
    long_about = None
)]
pub struct Tprmd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    #[command(flatten)]
    pub run: tprm_server::Run,
}

impl Tprmd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Openapi(openapi)) => openapi.run().await,
            None => self.run.run().await,
        }
    }
}

fn init_log() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[actix_web::main]
async fn main() -> impl Termination {
    init_log();
    Tprmd::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Tprmd::command().debug_assert();
    }
}
