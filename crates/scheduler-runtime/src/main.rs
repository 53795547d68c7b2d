//! Scheduler node entry point.
//!
//! Startup sequence:
//!
//! 1. Initialize tracing (env-filter, `warn` by default so log lines do not
//!    interleave with the interactive prompt)
//! 2. Build the subsystem container
//! 3. Read commands line by line until `quit` or end of input

use anyhow::Result;
use scheduler_runtime::commands::{Shell, ShellOutcome};
use scheduler_runtime::container::SchedulerContainer;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("{}\n", Shell::menu());

    let mut shell = Shell::new(SchedulerContainer::with_defaults());
    tracing::info!("scheduler node ready");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match shell.dispatch(&line) {
            ShellOutcome::Reply(reply) => println!("{reply}"),
            ShellOutcome::Quit => {
                println!("Bye!");
                break;
            }
        }
    }
    Ok(())
}
