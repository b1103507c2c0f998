use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod plan_file;

#[derive(Parser)]
#[command(name = "timeblock-cli", version, about = "Timeblock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule generation
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Task inspection
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Priority ranking
    Rank(commands::rank::RankArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "timeblock-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
