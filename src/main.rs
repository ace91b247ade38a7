use cert_index::cli::{handle_command, run_until_interrupted, Cli, RunOutcome};

#[tokio::main]
async fn main() {
    use clap::Parser;

    // A missing .env file is not an error
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let outcome = run_until_interrupted(handle_command(cli), interrupted()).await;
    match (&outcome, outcome.message()) {
        (RunOutcome::Failed(_), Some(message)) => eprintln!("{message}"),
        (_, Some(message)) => println!("{message}"),
        (_, None) => {}
    }
    std::process::exit(outcome.exit_code());
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
