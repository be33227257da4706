use crate::report::{run_batch, run_score, BatchArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Risk API",
    about = "Serve and run the loan credit-risk scoring engine from the command line",
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
    /// Score a single application described by flags
    Score(ScoreArgs),
    /// Score every application in a CSV export
    Batch(BatchArgs),
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
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["credit-risk-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_flags() {
        let cli = Cli::try_parse_from([
            "credit-risk-api",
            "score",
            "--income",
            "50000",
            "--loan-amount",
            "150000",
            "--employment",
            "self-employed",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.income, 50_000.0);
                assert_eq!(args.loan_term, 360);
                assert_eq!(args.employment, "self-employed");
                assert!(args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn batch_requires_csv_path() {
        assert!(Cli::try_parse_from(["credit-risk-api", "batch"]).is_err());
        let cli = Cli::try_parse_from(["credit-risk-api", "batch", "--csv", "apps.csv"])
            .expect("parses");
        assert!(matches!(cli.command, Some(Command::Batch(_))));
    }
}
