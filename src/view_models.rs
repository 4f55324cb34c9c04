// src/view_models.rs

use crate::mappings::to_display;
use crate::model::{FilterCategory, QuizQuestion, WordType};

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub prompt: String,
    pub details: Vec<(&'static str, String)>,
}

/// Resultado de comprobar una respuesta.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
}

/// Qué partes de la pantalla de quiz se ven en cada fase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct QuizVisibility {
    pub toolbar: bool,
    pub loading: bool,
    pub question: bool,
    pub feedback: bool,
    pub submit: bool,
    pub next: bool,
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

impl QuestionView {
    /// Formato según el tipo de palabra pedido; sin él (endpoint sin
    /// filtros) se deduce de los campos que trae la pregunta.
    pub fn for_word_type(question: &QuizQuestion, word_type: Option<WordType>) -> Self {
        let adjective = match word_type {
            Some(word_type) => word_type == WordType::Adjective,
            None => question.is_adjective(),
        };
        if adjective {
            Self::adjective(question)
        } else {
            Self::noun(question)
        }
    }

    pub fn from_question(question: &QuizQuestion) -> Self {
        Self::for_word_type(question, None)
    }

    fn noun(q: &QuizQuestion) -> Self {
        Self {
            prompt: format!("What is the {}, {} of \"{}\"?", q.g_case, q.quant, q.base),
            details: vec![
                ("Base word", q.base.clone()),
                ("Target case", to_display(FilterCategory::Case, &q.g_case)),
                ("Target quantity", to_display(FilterCategory::Quantity, &q.quant)),
                ("Declension", or_dash(q.declen.as_deref())),
                ("Gender", to_display(FilterCategory::Gender, &q.gender)),
            ],
        }
    }

    /// Tres parámetros por línea; los "n/a" no se muestran.
    fn adjective(q: &QuizQuestion) -> Self {
        let position = q.pos.clone().unwrap_or_default();
        let d_type = q
            .d_type
            .as_deref()
            .map(|d| to_display(FilterCategory::DType, d))
            .unwrap_or_default();

        let params: Vec<&str> = [
            position.as_str(),
            d_type.as_str(),
            q.quant.as_str(),
            q.g_case.as_str(),
            q.gender.as_str(),
        ]
        .into_iter()
        .filter(|v| !v.is_empty() && *v != "n/a")
        .collect();

        let lines: Vec<String> = params.chunks(3).map(|chunk| chunk.join(", ")).collect();

        Self {
            prompt: format!("What is the\n{} of \"{}\"?", lines.join(",\n"), q.base),
            details: vec![
                ("Adj Class", or_dash(q.class.as_deref())),
                ("Target case", q.g_case.clone()),
                ("Target quantity", q.quant.clone()),
                ("Gender", q.gender.clone()),
                ("Position", position),
                ("Declension Type", d_type),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun() -> QuizQuestion {
        QuizQuestion {
            base: "vala".into(),
            g_case: "gen".into(),
            quant: "pl".into(),
            gender: "sol".into(),
            declen: Some("3rd".into()),
            form: "valoti".into(),
            ..Default::default()
        }
    }

    #[test]
    fn noun_prompt_and_details() {
        let view = QuestionView::from_question(&noun());
        assert_eq!(view.prompt, "What is the gen, pl of \"vala\"?");
        assert!(view.details.contains(&("Target case", "genitive".to_string())));
        assert!(view.details.contains(&("Target quantity", "plural".to_string())));
        assert!(view.details.contains(&("Gender", "solar".to_string())));
        assert!(view.details.contains(&("Declension", "3rd".to_string())));
    }

    #[test]
    fn adjective_prompt_groups_three_per_line() {
        let question = QuizQuestion {
            base: "kasta".into(),
            g_case: "acc".into(),
            quant: "pl/pau".into(),
            gender: "ter/aq".into(),
            class: Some("1".into()),
            d_type: Some("comp".into()),
            pos: Some("postpos".into()),
            form: "kastoso".into(),
            ..Default::default()
        };
        let view = QuestionView::from_question(&question);
        assert_eq!(
            view.prompt,
            "What is the\npostpos, comparative, pl/pau,\nacc, ter/aq of \"kasta\"?"
        );
        assert!(view.details.contains(&("Declension Type", "comparative".to_string())));
    }

    #[test]
    fn adjective_prompt_skips_not_applicable() {
        let question = QuizQuestion {
            base: "kasta".into(),
            g_case: "adv".into(),
            quant: "n/a".into(),
            gender: "n/a".into(),
            d_type: Some("pos".into()),
            pos: Some("prepos".into()),
            form: "kastā".into(),
            ..Default::default()
        };
        let view = QuestionView::from_question(&question);
        assert_eq!(view.prompt, "What is the\nprepos, positive, adv of \"kasta\"?");
    }
}
