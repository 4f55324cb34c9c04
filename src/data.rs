// src/data.rs

use crate::model::{FilterCategory, WordType};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[derive(Deserialize, Debug, Clone)]
pub struct CategoryFilter {
    pub category: FilterCategory,
    /// Nombre del parámetro en la query (`cases`, `adj_d_types`...)
    pub param: String,
    pub codes: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WordTypeFilters {
    pub word_type: WordType,
    pub endpoint: String,
    pub categories: Vec<CategoryFilter>,
    #[serde(default)]
    pub preset: BTreeMap<FilterCategory, Vec<String>>,
}

impl WordTypeFilters {
    pub fn category(&self, category: FilterCategory) -> Option<&CategoryFilter> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn allows(&self, category: FilterCategory, code: &str) -> bool {
        self.category(category)
            .is_some_and(|c| c.codes.iter().any(|allowed| allowed == code))
    }
}

#[derive(Debug, Clone)]
pub struct FilterCatalog {
    pub word_types: Vec<WordTypeFilters>,
}

impl FilterCatalog {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        let word_types: Vec<WordTypeFilters> = serde_yaml::from_str(source)?;
        Ok(Self { word_types })
    }

    /// Filtros de un tipo de palabra. El catálogo embebido define todos los tipos.
    pub fn for_word_type(&self, word_type: WordType) -> &WordTypeFilters {
        self.word_types
            .iter()
            .find(|w| w.word_type == word_type)
            .unwrap_or_else(|| panic!("El catálogo de filtros no define '{word_type}'"))
    }
}

static CATALOG: LazyLock<FilterCatalog> = LazyLock::new(|| {
    FilterCatalog::from_yaml(include_str!("data/filters.yaml"))
        .expect("No se pudo parsear el catálogo de filtros YAML")
});

/// Catálogo de filtros embebido en el binario.
pub fn filter_catalog() -> &'static FilterCatalog {
    &CATALOG
}
