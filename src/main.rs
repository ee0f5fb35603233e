use backstack::StackOrder;
use backstack::core::action::Action;
use backstack::core::config::{self, CliOverrides, ResolvedConfig};
use backstack::core::state::App;
use backstack::replay::replay;
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;

#[derive(Parser)]
#[command(name = "backstack", about = "Back stack navigation sample")]
struct Args {
    /// Start destination (A, B or C)
    #[arg(short, long)]
    start: Option<String>,

    /// Order of the back stack panel
    #[arg(short, long, value_enum)]
    order: Option<StackOrder>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Press buttons headlessly and print the back stack after each press
    Replay {
        /// Button ids, e.g. go-to-b go-to-c back-to-a-inclusive
        #[arg(required = true)]
        actions: Vec<Action>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let cli = CliOverrides {
        start: args.start,
        stack_order: args.order,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to backstack.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("backstack.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {}", e);
    }
    log::info!("Backstack starting up: {:?}", resolved);

    match args.command {
        Some(Command::Replay { actions, json }) => run_replay(&resolved, &actions, json),
        None => backstack::tui::run(resolved),
    }
}

fn run_replay(config: &ResolvedConfig, actions: &[Action], json: bool) -> io::Result<()> {
    let mut app = App::from_config(config).map_err(io::Error::other)?;
    let report = replay(&mut app, actions).map_err(|e| {
        log::warn!("Replay failed: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{out}");
    } else {
        print!("{}", report.to_text(config.stack_order));
    }
    Ok(())
}
