use crate::maintenance::{run_migrate, run_seed};
use crate::server;
use clap::{Args, Parser, Subcommand};
use commission_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Commission Board",
    about = "Serve and maintain the commission board backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Create the commission and application tables when missing
    Migrate,
    /// Install the default commissions into an empty database
    Seed,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Migrate => run_migrate().await,
        Command::Seed => run_seed().await,
    }
}
