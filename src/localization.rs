use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum UiLanguage {
    #[default]
    En,
    Vl,
}

impl UiLanguage {
    pub fn label(self) -> &'static str {
        match self {
            UiLanguage::En => "English",
            UiLanguage::Vl => "High Valyrian",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Translation {
    pub en: String,
    #[serde(default)]
    pub vl: String,
}

/// Tabla clave -> traducciones, el mismo formato que `localization.json` del servidor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Localization {
    entries: HashMap<String, Translation>,
}

impl Localization {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, Translation> = serde_json::from_str(source)?;
        Ok(Self { entries })
    }

    /// Copia embebida, usada hasta que llegue la del servidor.
    pub fn embedded() -> Self {
        Self::from_json(include_str!("data/localization.json"))
            .expect("No se pudo parsear localization.json embebido")
    }

    /// Texto en el idioma pedido; si falta, en inglés; si tampoco, la clave.
    pub fn text<'a>(&'a self, key: &'a str, lang: UiLanguage) -> &'a str {
        let Some(entry) = self.entries.get(key) else {
            return key;
        };
        let text = match lang {
            UiLanguage::En => entry.en.as_str(),
            UiLanguage::Vl => entry.vl.as_str(),
        };
        if text.is_empty() { entry.en.as_str() } else { text }
    }

    pub fn lookup<'a>(&'a self, key: &'a str, lang: UiLanguage) -> Option<&'a str> {
        self.entries.get(key).map(|_| self.text(key, lang))
    }

    /// Sobrescribe las claves que trae `other` y conserva el resto.
    pub fn merge(&mut self, other: Localization) {
        log::info!("Aplicando {} traducciones del servidor", other.entries.len());
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
