//! `erp42-parkd`: open-loop parallel-parking node

use clap::Parser;

use erp42_park::cli::{execute, Cli};
use erp42_park::error::ExitCode;
use erp42_park::observability::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler: run until the maneuver or process ends
            std::future::pending::<()>().await;
        }
    };

    match execute(cli, shutdown).await {
        Ok(_) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
