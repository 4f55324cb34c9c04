use crate::data::FilterCatalog;
use crate::error::QuizError;
use crate::filters::SelectedFilters;
use crate::model::WordType;
use url::form_urlencoded;

pub const UNFILTERED_ENDPOINT: &str = "/quiz-question";
pub const CHECK_ANSWER_ENDPOINT: &str = "/check-answer";
pub const LOCALIZATION_PATH: &str = "/static/localization.json";

/// Ruta (con query) de la petición de pregunta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRequest {
    pub word_type: Option<WordType>,
    pub path: String,
}

impl QuestionRequest {
    pub fn unfiltered() -> Self {
        Self {
            word_type: None,
            path: UNFILTERED_ENDPOINT.to_string(),
        }
    }

    /// Construye la petición para el tipo de palabra seleccionado.
    ///
    /// Cada categoría con selección se envía como lista separada por comas;
    /// las vacías se omiten.
    pub fn from_filters(catalog: &FilterCatalog, selected: &SelectedFilters) -> Result<Self, QuizError> {
        let code = selected.word_type.as_deref().unwrap_or_default();
        let word_type = WordType::from_code(code)?;
        let filters = catalog.for_word_type(word_type);

        let mut params = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for category in &filters.categories {
            let codes = selected.codes(category.category);
            if codes.is_empty() {
                continue;
            }
            params.append_pair(&category.param, &codes.join(","));
            any = true;
        }

        let path = if any {
            format!("{}?{}", filters.endpoint, params.finish())
        } else {
            filters.endpoint.clone()
        };

        Ok(Self {
            word_type: Some(word_type),
            path,
        })
    }
}
