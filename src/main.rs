use clap::Parser;
use drills::cli::{execute_command, resolve_log_filter, Cli};
use drills::config::{ConfigLoader, DrillsConfig};
use drills::error::DrillError;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    // Configuration is loaded before logging starts so it can pick the level
    let loaded = ConfigLoader::new().with_path(cli.config.clone()).load();
    let configured_level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_level.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(resolve_log_filter(cli.verbose, configured_level))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("drills started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = loaded
        .map_err(anyhow::Error::from)
        .and_then(|config| run(cli, config));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            let exit_code = match e.downcast_ref::<DrillError>() {
                Some(drill) => {
                    eprintln!("Error: {}", drill.user_message());
                    drill.exit_code()
                }
                None => {
                    eprintln!("Error: {e}");
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: Cli, config: DrillsConfig) -> anyhow::Result<String> {
    let format = cli.format.unwrap_or(config.output);
    execute_command(cli.command, &config, format)
}
