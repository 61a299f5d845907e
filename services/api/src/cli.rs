use crate::demo::{run_demo, run_trends_report, DemoArgs, TrendsReportArgs};
use crate::server;
use career_mentor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Mentor",
    about = "Demonstrate and run the Career Mentor advisory service from the command line",
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
    /// Print the skill and career trends report for stakeholder demos
    Trends(TrendsReportArgs),
    /// Run an end-to-end CLI demo covering signup, survey, and profile flows
    Demo(DemoArgs),
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
        Command::Trends(args) => run_trends_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
