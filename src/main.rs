use std::io::{self, Write};

use sww::application::{all_repositories, resolve_path, select_repositories, BatchExecutor};
use sww::cli::output::format_error;
use sww::cli::Cli;
use sww::domain::{Action, Invocation};
use sww::error::SwwError;
use sww::infrastructure::{ProcessRunner, RepositoryConfig, TerminalPrompter};

fn main() {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("{}", format_error(&e.display_with_suggestions()));
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SwwError> {
    // Reject bad commands before touching the repository list
    let action = Action::parse(cli.all, &cli.command)?;
    let config = RepositoryConfig::load()?;
    let prompter = TerminalPrompter::new();

    match action {
        Action::ChangeDirectory { key } => {
            let path = resolve_path(&config.repositories, key.as_deref(), &prompter)?;
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", path.display())?;
            stdout.flush()?;
            Ok(())
        }
        Action::Batch(Invocation { all, verb, args }) => {
            let selected = if all {
                all_repositories(&config.repositories)?
            } else {
                select_repositories(&config.repositories, &prompter)?
            };

            let executor = BatchExecutor::new(ProcessRunner);
            executor.execute(
                &selected,
                verb,
                &args,
                &mut io::stdout(),
                &mut io::stderr(),
            )?;
            Ok(())
        }
    }
}
