// Workers Directory GUI - Main Entry Point
// Native directory of service workers with search, service filter and sorting

mod state;
mod ui;

use eframe::egui;
use state::{DirectoryState, UiEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use ui::render_app_layout;
use workers_directory_backend::config::Config;
use workers_directory_backend::directory::{
    FetchError, HttpWorkerSource, WorkerRecord, WorkerSource,
};

type FetchOutcome = Result<Vec<WorkerRecord>, FetchError>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let http_source = HttpWorkerSource::new(config.source.workers_url);
    tracing::info!(url = %http_source.url(), "Starting workers directory");
    let source: Arc<dyn WorkerSource> = Arc::new(http_source);

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Workers Directory")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Workers Directory",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = DirectoryApp::new(runtime, source);
            // First load on page entry
            app.handle(&cc.egui_ctx, UiEvent::LoadStarted);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

/// Main application struct
/// Owns the directory state and runs listing fetches off the UI thread
struct DirectoryApp {
    /// Load state, criteria and derived view
    state: DirectoryState,
    /// Where listing fetches come from
    source: Arc<dyn WorkerSource>,
    /// Runtime driving fetches
    runtime: tokio::runtime::Runtime,
    /// Fetch outcomes, in completion order
    outcomes_tx: Sender<FetchOutcome>,
    outcomes_rx: Receiver<FetchOutcome>,
}

impl DirectoryApp {
    fn new(runtime: tokio::runtime::Runtime, source: Arc<dyn WorkerSource>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::channel();
        Self {
            state: DirectoryState::new(),
            source,
            runtime,
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Dispatch an event, starting a fetch first if it asks for one
    fn handle(&mut self, ctx: &egui::Context, event: UiEvent) {
        if event == UiEvent::LoadStarted {
            self.spawn_fetch(ctx);
        }
        self.state.dispatch(event);
    }

    /// Fetch in the background; an in-flight fetch is not cancelled
    fn spawn_fetch(&self, ctx: &egui::Context) {
        let source = Arc::clone(&self.source);
        let tx = self.outcomes_tx.clone();
        let ctx = ctx.clone();

        tracing::info!("Fetching workers");
        self.runtime.spawn(async move {
            let outcome = source.fetch_all().await;
            match &outcome {
                Ok(workers) => tracing::info!(count = workers.len(), "Workers loaded"),
                Err(e) => tracing::error!("Failed to load workers: {}", e),
            }
            // Receiver only disappears when the window has closed
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.state.dispatch(UiEvent::LoadFinished(outcome));
        }

        for event in render_app_layout(ctx, &self.state) {
            self.handle(ctx, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Source that answers immediately with a fixed outcome
    struct StaticSource(FetchOutcome);

    #[async_trait]
    impl WorkerSource for StaticSource {
        async fn fetch_all(&self) -> FetchOutcome {
            self.0.clone()
        }
    }

    fn app_with(outcome: FetchOutcome) -> DirectoryApp {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        DirectoryApp::new(runtime, Arc::new(StaticSource(outcome)))
    }

    fn drain(app: &mut DirectoryApp) {
        let outcome = app
            .outcomes_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        app.state.dispatch(UiEvent::LoadFinished(outcome));
    }

    #[test]
    fn test_app_creation() {
        let app = app_with(Ok(vec![]));
        assert!(app.state.load.is_loading());
    }

    #[test]
    fn test_load_started_fetches_and_loads() {
        let mut app = app_with(Ok(vec![WorkerRecord::new(1, "Alice", "Plumber", 500.0)]));
        let ctx = egui::Context::default();

        app.handle(&ctx, UiEvent::LoadStarted);
        assert!(app.state.load.is_loading());

        drain(&mut app);
        assert_eq!(app.state.view().visible.len(), 1);
    }

    #[test]
    fn test_failed_fetch_shows_error() {
        let mut app = app_with(Err(FetchError::Status(500)));
        let ctx = egui::Context::default();

        app.handle(&ctx, UiEvent::LoadStarted);
        drain(&mut app);

        assert_eq!(app.state.load.error(), Some(&FetchError::Status(500)));
        assert!(app.state.view().visible.is_empty());
    }
}
