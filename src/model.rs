use crate::error::QuizError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    #[default]
    Noun,
    Adjective,
}

impl WordType {
    pub const ALL: [WordType; 2] = [WordType::Noun, WordType::Adjective];

    pub fn code(self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Adjective => "adjective",
        }
    }

    /// Interpreta el código de tipo de palabra que llega desde la UI o la configuración.
    pub fn from_code(code: &str) -> Result<Self, QuizError> {
        match code.trim() {
            "noun" => Ok(WordType::Noun),
            "adjective" => Ok(WordType::Adjective),
            other => Err(QuizError::UnsupportedWordType(other.to_string())),
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum FilterCategory {
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "quantity")]
    Quantity,
    #[serde(rename = "gender")]
    Gender,
    #[serde(rename = "declension")]
    Declension,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "position")]
    Position,
    #[serde(rename = "d_type")]
    DType,
    #[serde(rename = "wordType")]
    WordType,
}

impl FilterCategory {
    pub fn code(self) -> &'static str {
        match self {
            FilterCategory::Case => "case",
            FilterCategory::Quantity => "quantity",
            FilterCategory::Gender => "gender",
            FilterCategory::Declension => "declension",
            FilterCategory::Class => "class",
            FilterCategory::Position => "position",
            FilterCategory::DType => "d_type",
            FilterCategory::WordType => "wordType",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pregunta tal y como la devuelve el servidor.
///
/// Las revisiones antiguas del servidor usaban otros nombres de campo
/// (`base_word`, `target_case`, `correct_answer`...), que se aceptan como alias.
/// Los valores salen de SQLite, así que un campo puede llegar como número o `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QuizQuestion {
    #[serde(alias = "base_word", deserialize_with = "scalar_text")]
    pub base: String,
    #[serde(default, alias = "target_case", deserialize_with = "scalar_text")]
    pub g_case: String,
    #[serde(default, alias = "target_quantity", deserialize_with = "scalar_text")]
    pub quant: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub gender: String,
    #[serde(default, alias = "declension", deserialize_with = "optional_scalar_text")]
    pub declen: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub d_type: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub pos: Option<String>,
    #[serde(alias = "correct_answer", deserialize_with = "scalar_text")]
    pub form: String,
}

impl QuizQuestion {
    /// Las preguntas de adjetivos traen grado o posición; las de sustantivos no.
    /// Solo se usa cuando no se sabe qué tipo de palabra se pidió.
    pub fn is_adjective(&self) -> bool {
        self.d_type.is_some() || self.pos.is_some() || self.class.is_some()
    }
}

/// Texto, número o booleano como cadena; `null` queda en `None`.
fn value_to_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        other => Err(format!("se esperaba un valor simple, llegó {other}")),
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_text(value)
        .map(Option::unwrap_or_default)
        .map_err(de::Error::custom)
}

fn optional_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_text(value).map_err(de::Error::custom)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum QuizResponse {
    Error { error: String },
    Question(QuizQuestion),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckAnswerRequest {
    pub answer: String,
    pub correct_answer: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub correct_answer: String,
}
