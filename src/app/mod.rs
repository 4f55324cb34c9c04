use crate::config::QuizSettings;
use crate::filters::FilterState;
use crate::localization::Localization;
use crate::remote::RemoteClient;

// Submódulos
pub mod actions;
pub mod session;

pub use session::{EnterAction, QuizPhase, QuizSession, SubmitOutcome};

pub struct QuizApp {
    pub settings: QuizSettings,
    pub filters: FilterState,
    pub session: QuizSession,
    pub localization: Localization,
    pub remote: RemoteClient,
    pub show_settings: bool,
    /// Borrador del campo "Server URL" en la ventana de ajustes.
    pub server_url_draft: String,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Solo se restauran los ajustes; los filtros empiezan con el preset
        let settings: QuizSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Servidor del quiz: {}", display_server(&settings.server_url));

        let mut app = Self::with_settings(settings, RemoteClient::new(Some(cc.egui_ctx.clone())));
        app.request_localization();
        app
    }

    pub fn with_settings(settings: QuizSettings, remote: RemoteClient) -> Self {
        Self {
            filters: FilterState::new(settings.initial_word_type),
            session: QuizSession::new(),
            localization: Localization::embedded(),
            remote,
            show_settings: false,
            server_url_draft: settings.server_url.clone(),
            settings,
        }
    }

    /// Texto traducido al idioma de la interfaz.
    pub fn t(&self, key: &str) -> String {
        self.localization
            .text(key, self.settings.ui_language)
            .to_owned()
    }
}

fn display_server(url: &str) -> &str {
    if url.trim().is_empty() { "(mismo origen)" } else { url }
}
