/// Mensaje genérico que ve el usuario para cualquier fallo de transporte.
pub const FETCH_FAILED: &str = "Failed to fetch quiz question from server";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// Error lógico devuelto por el servidor en el campo `error`.
    #[error("{0}")]
    Server(String),
    #[error("unsupported word type: {0}")]
    UnsupportedWordType(String),
}

impl QuizError {
    /// Devuelve (título, detalle) para el panel de la pregunta.
    ///
    /// Solo el error del servidor muestra su propio texto; el resto se
    /// presenta con el mensaje genérico.
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            QuizError::Server(message) => ("Error loading quiz", message.clone()),
            _ => ("Error", FETCH_FAILED.to_string()),
        }
    }
}
