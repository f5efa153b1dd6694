mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use app::DirectoryApp;
use clap::Parser;
use data::filter::Criteria;
use eframe::egui;
use state::{AppState, LoadState};

/// Browse a directory of companies, filtered by name, sector and country.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the array of company records.
    #[arg(long, env = "COMPANY_DIRECTORY_DATA", default_value = "data.json")]
    data: PathBuf,

    /// Print the listing and statistics to stdout instead of opening a window.
    #[arg(long)]
    report: bool,

    /// Case-insensitive name substring.
    #[arg(long, default_value = "")]
    name: String,

    /// Exact sector to show.
    #[arg(long)]
    sector: Option<String>,

    /// Country (matched as a substring of the location).
    #[arg(long)]
    country: Option<String>,

    /// With --report, also print the available sectors and countries.
    #[arg(long, requires = "report")]
    list_filters: bool,
}

impl Cli {
    fn criteria(&self) -> Criteria {
        Criteria {
            name: self.name.clone(),
            sector: self.sector.clone().filter(|s| !s.is_empty()),
            location: self.country.clone().filter(|s| !s.is_empty()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    if cli.report {
        run_report(&cli)
    } else {
        run_gui(cli)
    }
}

/// Load synchronously and print one report for the CLI criteria.
fn run_report(cli: &Cli) -> Result<()> {
    let mut state = AppState::with_criteria(cli.criteria());
    state.apply_load_result(data::loader::load_file(&cli.data));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.list_filters && state.load_state == LoadState::Ready {
        ui::report::write_filter_options(&mut out, &state.options)?;
    }
    ui::report::write_report(&mut out, &state)?;

    if let LoadState::Failed(_) = state.load_state {
        bail!("could not load {}", cli.data.display());
    }
    Ok(())
}

fn run_gui(cli: Cli) -> Result<()> {
    let criteria = cli.criteria();
    let source = cli.data;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Company Directory",
        options,
        Box::new(move |cc| Ok(Box::new(DirectoryApp::new(&cc.egui_ctx, source, criteria)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
