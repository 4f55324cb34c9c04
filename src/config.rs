use crate::answer_utils::NormalizationScope;
use crate::localization::UiLanguage;
use crate::model::WordType;
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_SERVER: &str = "http://127.0.0.1:8000";
pub const SERVER_ENV_VAR: &str = "VALYRIAN_QUIZ_SERVER";

/// Dónde se comprueba la respuesta del usuario.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AnswerCheckMode {
    #[default]
    Local,
    /// POST /check-answer, como hacían las primeras versiones.
    Server,
}

/// Ajustes persistidos entre sesiones. Los filtros no se guardan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizSettings {
    pub server_url: String,
    pub normalization: NormalizationScope,
    pub answer_check: AnswerCheckMode,
    pub ui_language: UiLanguage,
    pub ignore_filters: bool,
    pub initial_word_type: WordType,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            normalization: NormalizationScope::default(),
            answer_check: AnswerCheckMode::default(),
            ui_language: UiLanguage::default(),
            ignore_filters: false,
            initial_word_type: WordType::Noun,
        }
    }
}

impl QuizSettings {
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.server_url, path)
    }
}

fn normalize_server(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Une la URL base con una ruta absoluta sin duplicar barras.
/// Con base vacía la ruta queda relativa al origen (caso web).
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_server_url() -> String {
    std::env::var(SERVER_ENV_VAR)
        .ok()
        .and_then(|s| normalize_server(&s))
        .unwrap_or_else(|| DEFAULT_NATIVE_SERVER.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn default_server_url() -> String {
    server_from_build_env()
        .or_else(server_from_querystring)
        .or_else(server_from_meta)
        // Mismo origen que la página
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn server_from_build_env() -> Option<String> {
    option_env!("VALYRIAN_QUIZ_SERVER").and_then(normalize_server)
}

#[cfg(target_arch = "wasm32")]
fn server_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "server")
        .and_then(|(_, value)| normalize_server(&value))
}

#[cfg(target_arch = "wasm32")]
fn server_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='valyrian-quiz-server']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_server)
}
