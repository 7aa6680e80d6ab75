//! Main app runners for the serve and journal modes

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ConfigStore, DictationEvent, ExtractionError, Extractor, RecordSink};
use crate::application::{CaptureController, CaptureError, ExtractionService};
use crate::domain::config::AppConfig;
use crate::domain::extraction::Extraction;
use crate::infrastructure::{AiGatewayClient, StdinDictation, XdgConfigStore};
use crate::server;

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load and merge configuration from defaults, file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env_value("VITALVOICE_API_KEY"),
        gateway_url: env_value("VITALVOICE_GATEWAY_URL"),
        model: env_value("VITALVOICE_MODEL"),
        bind: env_value("VITALVOICE_BIND"),
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// Get the API key, failing before any network call when unset
fn require_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ExtractionError::Configuration.to_string())
}

/// Run the extraction HTTP service
pub async fn run_serve(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let client = AiGatewayClient::with_endpoint(
        api_key,
        config.gateway_url_or_default(),
        config.model_or_default(),
    );
    let service: Arc<dyn Extractor> = Arc::new(ExtractionService::new(client));

    presenter.info(&format!(
        "Serving extraction API on http://{}",
        config.bind_or_default()
    ));

    if let Err(e) = server::serve(config.bind_or_default(), service).await {
        presenter.error(&format!("Server error: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Terminal record sink for journal mode
struct PresenterSink {
    presenter: Presenter,
}

#[async_trait]
impl RecordSink for PresenterSink {
    async fn record_ready(&self, extraction: &Extraction) {
        let record = extraction.record();
        self.presenter.success(&record.detection_summary());
        self.presenter.record(record, extraction.is_recovered());
    }

    async fn capture_failed(&self, reason: &str) {
        self.presenter.error(reason);
    }
}

/// Run one journaling round-trip from stdin dictation
pub async fn run_journal(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let client = AiGatewayClient::with_endpoint(
        api_key,
        config.gateway_url_or_default(),
        config.model_or_default(),
    );
    let service = ExtractionService::new(client);
    let sink = PresenterSink { presenter };
    let controller = CaptureController::new(StdinDictation::new(), service, sink);

    presenter.info("Speak about your health, one line at a time. Finish with a blank line.");

    let mut stream = match controller.start().await {
        Ok(stream) => stream,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    while let Some(event) = stream.recv().await {
        if event == DictationEvent::Stopped {
            break;
        }
        controller.handle_event(event).await;
    }

    presenter.info("Analyzing your voice input...");

    match controller.stop().await {
        // The sink already displayed the record
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(CaptureError::NoSpeech) => {
            presenter.warn(&CaptureError::NoSpeech.to_string());
            ExitCode::from(EXIT_ERROR)
        }
        // Extraction failures were surfaced through the sink
        Err(CaptureError::Extraction(_)) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
