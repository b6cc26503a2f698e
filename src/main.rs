use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::task::LocalSet;
use tracing::Level;

use teller::cli::{
    handle_account_command, handle_movement, handle_transaction_command, report, ConsoleSurface,
};
use teller::client::LedgerClient;
use teller::config::{logging, Settings, TellerPaths};
use teller::display::Formatter;
use teller::protocol::Movement;
use teller::status::{Notifier, Timing};
use teller::transport::{HttpEndpoint, Transport};
use teller::tui::{run_tui, TuiSurface};
use teller::view::{Outcome, Surface, ViewBinder};

#[derive(Parser)]
#[command(
    name = "teller",
    author = "Kaylee Beyene",
    version,
    about = "Terminal client for a remote banking ledger",
    long_about = "Teller talks to a small banking ledger over a JSON endpoint. \
                  Open accounts, move money, check balances and browse the \
                  transaction history from the terminal."
)]
struct Cli {
    /// Ledger endpoint URL, overriding the configured one
    #[arg(long, global = true, env = "TELLER_ENDPOINT")]
    endpoint: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Account commands
    #[command(subcommand)]
    Account(teller::cli::AccountCommands),

    /// Deposit to an account
    Deposit {
        /// Account number
        #[arg(allow_hyphen_values = true)]
        account: String,
        /// Amount (e.g., "250" or "250.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Withdraw from an account
    Withdraw {
        /// Account number
        #[arg(allow_hyphen_values = true)]
        account: String,
        /// Amount (e.g., "250" or "250.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(teller::cli::TransactionCommands),

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = TellerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        settings.tracing_level()
    };

    let command = match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote configuration to: {}", paths.settings_file().display());
            println!("Endpoint: {}", settings.endpoint);
            println!();
            println!("Run 'teller tui' to launch the interactive interface.");
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(ExitCode::SUCCESS);
        }
        None => Commands::Tui,
        Some(command) => command,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();

    if let Commands::Tui = command {
        logging::init_file(&paths, level)?;
        let binder = Rc::new(bind(&settings, TuiSurface::new())?);
        local.block_on(
            &runtime,
            run_tui(binder, &settings.endpoint, settings.tick_rate()),
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    logging::init_stderr(level)?;
    let binder = bind(&settings, ConsoleSurface::new())?;
    let outcome = local.block_on(&runtime, run_command(&binder, command));

    let problem = report(binder.notifier());
    if problem || outcome.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Wire a surface to the configured endpoint
fn bind<S: Surface>(settings: &Settings, surface: S) -> Result<ViewBinder<S>> {
    let notifier = Notifier::new(Timing {
        display: settings.notification_display(),
        fade: settings.notification_fade(),
    });
    let endpoint = HttpEndpoint::new(settings.endpoint.as_str())?;
    let client = LedgerClient::new(Transport::new(Box::new(endpoint), notifier.clone()));
    let formatter = Formatter::new(settings.currency_symbol.as_str());

    Ok(ViewBinder::new(client, notifier, formatter, surface))
}

async fn run_command(binder: &ViewBinder<ConsoleSurface>, command: Commands) -> Outcome {
    match command {
        Commands::Account(cmd) => handle_account_command(binder, cmd).await,
        Commands::Deposit { account, amount } => {
            handle_movement(binder, Movement::Deposit, account, amount).await
        }
        Commands::Withdraw { account, amount } => {
            handle_movement(binder, Movement::Withdraw, account, amount).await
        }
        Commands::Transaction(cmd) => handle_transaction_command(binder, cmd).await,
        Commands::Tui | Commands::Init | Commands::Config => Outcome::Completed,
    }
}

fn print_config(paths: &TellerPaths, settings: &Settings) {
    println!("Teller Configuration");
    println!("====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Endpoint:        {}", settings.endpoint);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!(
        "  Notifications:   {} ms visible, {} ms fade",
        settings.notification_display_ms, settings.notification_fade_ms
    );
    println!("  Log level:       {}", settings.log_level);
}
