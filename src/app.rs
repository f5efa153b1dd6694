use std::path::PathBuf;
use std::sync::mpsc;

use eframe::egui;

use crate::data::filter::Criteria;
use crate::data::loader;
use crate::data::model::Company;
use crate::error::DataLoadError;
use crate::state::{AppState, LoadState};
use crate::ui::{cards, panels};

type LoadResult = Result<Vec<Company>, DataLoadError>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DirectoryApp {
    pub state: AppState,
    /// Receives the single load result; dropped once it has arrived.
    load_rx: Option<mpsc::Receiver<LoadResult>>,
}

impl DirectoryApp {
    /// Create the app and start the one background load of `source`.
    pub fn new(ctx: &egui::Context, source: PathBuf, criteria: Criteria) -> Self {
        let (tx, rx) = mpsc::channel();
        let repaint = ctx.clone();

        std::thread::spawn(move || {
            let result = loader::load_file(&source);
            // The receiver is gone only if the window already closed.
            let _ = tx.send(result);
            repaint.request_repaint();
        });

        Self {
            state: AppState::with_criteria(criteria),
            load_rx: Some(rx),
        }
    }

    /// Apply the load result if it has arrived, without blocking.
    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.state.apply_load_result(result);
                self.load_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                log::error!("Loader thread exited without a result");
                self.load_rx = None;
                self.state.apply_load_result(Err(DataLoadError::Read {
                    path: PathBuf::new(),
                    source: std::io::Error::other("loader thread exited"),
                }));
            }
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: search and selection controls ----
        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            panels::filter_bar(ui, &mut self.state);
        });

        // ---- Right side panel: statistics (hidden on load failure) ----
        if self.state.load_state == LoadState::Ready {
            egui::SidePanel::right("stats_panel")
                .default_width(240.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::stats_panel(ui, &self.state);
                });
        }

        // ---- Central panel: company cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::company_list(ui, &self.state);
        });
    }
}
