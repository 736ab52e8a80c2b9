use crate::report::{run_analyze, run_assess, AnalyzeArgs, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use incident_qa::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Incident QA Analyzer",
    about = "Clean, flag and score RCA/CA/PA text from incident report exports",
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
    /// Analyze monthly incident CSV files and write the scored export
    Analyze(AnalyzeArgs),
    /// Assess a single text value
    Assess(AssessArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Assess(args) => run_assess(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["incident-qa-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "incident-qa-api",
            "analyze",
            "January 2025.csv",
            "February 2025.csv",
            "--output",
            "out.csv",
            "--preview",
            "5",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.inputs.len(), 2);
                assert_eq!(args.output.to_str(), Some("out.csv"));
                assert_eq!(args.preview, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn analyze_requires_an_input() {
        assert!(Cli::try_parse_from(["incident-qa-api", "analyze"]).is_err());
    }
}
