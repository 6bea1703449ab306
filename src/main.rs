//! Hotfixers - Main entry point
//!
//! Parses the command line, sets up logging, loads the catalog, and either
//! runs a headless command or starts the TUI.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hotfixers::app::App;
use hotfixers::catalog::{Catalog, PackageId};
use hotfixers::catalog_file::{load_catalog, CatalogDocument};
use hotfixers::cli::{Cli, Commands};
use hotfixers::engine::{ConfigurationEngine, NavigationRequest, QuoteSummary, SelectionError};
use hotfixers::error::HotfixersError;
use hotfixers::ui::format::{format_addon_price, format_price};

/// Initialize tracing. `RUST_LOG` overrides `default_level`.
fn init_logging(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The TUI owns the screen, so stay quiet on stderr unless asked
    let interactive = matches!(
        cli.command,
        None | Some(Commands::Configure { .. }) | Some(Commands::Details { .. })
    );
    let default_level = if interactive && cli.log_file.is_none() {
        "warn"
    } else {
        "info"
    };
    init_logging(cli.log_file.as_deref(), default_level)?;
    info!("Hotfixers starting up");
    debug!(?cli, "CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { file }) => {
            info!("Validating catalog file: {:?}", file);
            let result = CatalogDocument::load_from_file(&file).and_then(|doc| doc.validate());
            match result {
                Ok(()) => println!("✓ Catalog file is valid: {:?}", file),
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ Catalog validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::ExportCatalog { file }) => {
            CatalogDocument::from(&Catalog::builtin()).save_to_file(&file)?;
            info!("Exported built-in catalog to {:?}", file);
            println!("✓ Wrote built-in catalog to {:?}", file);
        }
        command => {
            let catalog = Arc::new(match &cli.catalog {
                Some(path) => {
                    info!("Loading catalog from {:?}", path);
                    load_catalog(path)?
                }
                None => Catalog::builtin(),
            });

            match command {
                Some(Commands::Catalog { json }) => print_catalog(&catalog, json)?,
                Some(Commands::Quote {
                    package,
                    addons,
                    json,
                }) => match build_quote(catalog, &package, &addons) {
                    Ok(summary) => print_quote(&summary, json)?,
                    Err(e) => {
                        error!("Quote rejected: {}", e);
                        eprintln!("✗ {}", e);
                        std::process::exit(1);
                    }
                },
                Some(Commands::Configure { package }) => {
                    run_tui(
                        catalog,
                        NavigationRequest::Configure {
                            package: package.map(PackageId::from),
                        },
                    )?;
                }
                Some(Commands::Details { package }) => {
                    let request = match ConfigurationEngine::new(Arc::clone(&catalog), None)
                        .request_details(&package)
                    {
                        Ok(request) => request,
                        Err(e) => {
                            eprintln!("✗ {}", e);
                            std::process::exit(1);
                        }
                    };
                    run_tui(catalog, request)?;
                }
                _ => {
                    info!("No command specified, opening the home screen");
                    run_tui(catalog, NavigationRequest::Home)?;
                }
            }
        }
    }

    Ok(())
}

/// Run the TUI starting at `start`
fn run_tui(catalog: Arc<Catalog>, start: NavigationRequest) -> hotfixers::error::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| HotfixersError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), EnterAlternateScreen).map_err(|e| {
        HotfixersError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| HotfixersError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(catalog, start);
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}

/// Price a package plus add-ons. Repeating an add-on id toggles it off again.
fn build_quote(
    catalog: Arc<Catalog>,
    package: &str,
    addons: &[String],
) -> std::result::Result<QuoteSummary, SelectionError> {
    let mut engine = ConfigurationEngine::new(catalog, None);
    engine.select_package(package)?;
    for addon in addons {
        engine.toggle_addon(addon)?;
    }
    Ok(engine.summary())
}

fn print_quote(summary: &QuoteSummary, json: bool) -> hotfixers::error::Result<()> {
    if json {
        println!("{}", summary.to_json()?);
    } else {
        for line in summary.to_lines(format_price) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, json: bool) -> hotfixers::error::Result<()> {
    if json {
        println!("{}", CatalogDocument::from(catalog).to_json()?);
        return Ok(());
    }

    println!("Packages");
    for package in catalog.list_packages() {
        println!(
            "  {:<20} {:<28} {:>10}",
            package.id,
            package.title,
            format_price(package.base_price)
        );
    }
    for entry in catalog.list_addon_groups() {
        println!();
        println!("{}", entry.group.heading());
        for addon in &entry.addons {
            println!(
                "  {:<20} {:<28} {:>10}",
                addon.id,
                addon.title,
                format_addon_price(addon.price)
            );
        }
    }
    Ok(())
}
