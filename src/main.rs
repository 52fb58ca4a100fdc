use clap::Parser;
use passlock::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => passlock::cli::commands::init::execute(&cli, force),
        Commands::Add => passlock::cli::commands::add::execute(&cli),
        Commands::List => passlock::cli::commands::list::execute(&cli),
        Commands::Show { index, reveal } => {
            passlock::cli::commands::show::execute(&cli, index, reveal)
        }
        Commands::Edit { index } => passlock::cli::commands::edit::execute(&cli, index),
        Commands::Remove { index, force } => {
            passlock::cli::commands::remove::execute(&cli, index, force)
        }
        Commands::ChangePassword => passlock::cli::commands::change_password::execute(&cli),
        Commands::Completions { ref shell } => {
            passlock::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passlock::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
