use crate::data::{FilterCatalog, WordTypeFilters, filter_catalog};
use crate::filter_sections::{FilterSection, generate_sections};
use crate::model::{FilterCategory, WordType};
use std::collections::{BTreeMap, BTreeSet};

/// Instantánea de los filtros seleccionados, lista para construir la query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedFilters {
    pub word_type: Option<String>,
    /// Códigos por categoría, en el orden del catálogo. Las categorías vacías no aparecen.
    pub categories: BTreeMap<FilterCategory, Vec<String>>,
}

impl SelectedFilters {
    pub fn codes(&self, category: FilterCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Estado de los botones de filtro. La UI solo lo proyecta.
#[derive(Clone, Debug)]
pub struct FilterState {
    catalog: &'static FilterCatalog,
    word_type: WordType,
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl FilterState {
    pub fn new(word_type: WordType) -> Self {
        Self::with_catalog(filter_catalog(), word_type)
    }

    pub fn with_catalog(catalog: &'static FilterCatalog, word_type: WordType) -> Self {
        let mut state = Self {
            catalog,
            word_type,
            selected: BTreeMap::new(),
        };
        state.apply_preset();
        state
    }

    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    pub fn active_filters(&self) -> &'static WordTypeFilters {
        self.catalog.for_word_type(self.word_type)
    }

    pub fn is_selected(&self, category: FilterCategory, code: &str) -> bool {
        if category == FilterCategory::WordType {
            return self.word_type.code() == code;
        }
        self.selected
            .get(&category)
            .is_some_and(|set| set.contains(code))
    }

    /// Cambia el estado de un botón. Devuelve `true` si algo cambió.
    ///
    /// El tipo de palabra es de selección única: pulsarlo sustituye la
    /// selección en vez de alternarla.
    pub fn toggle(&mut self, category: FilterCategory, code: &str) -> bool {
        if category == FilterCategory::WordType {
            return match WordType::from_code(code) {
                Ok(word_type) => self.select_word_type(word_type),
                Err(err) => {
                    log::warn!("Ignorando tipo de palabra: {err}");
                    false
                }
            };
        }

        if !self.active_filters().allows(category, code) {
            log::warn!(
                "Código '{code}' no válido para '{category}' en {}",
                self.word_type
            );
            return false;
        }

        let set = self.selected.entry(category).or_default();
        if !set.remove(code) {
            set.insert(code.to_string());
        }
        true
    }

    /// Cambia de tipo de palabra: regenera las categorías y aplica su preset.
    pub fn select_word_type(&mut self, word_type: WordType) -> bool {
        if self.word_type == word_type {
            return false;
        }
        log::debug!("Tipo de palabra: {} -> {}", self.word_type, word_type);
        self.word_type = word_type;
        self.apply_preset();
        true
    }

    fn apply_preset(&mut self) {
        self.selected.clear();
        let filters = self.active_filters();
        for (category, codes) in &filters.preset {
            let set = self.selected.entry(*category).or_default();
            set.extend(
                codes
                    .iter()
                    .filter(|code| filters.allows(*category, code))
                    .cloned(),
            );
        }
    }

    /// Lee la selección actual en el orden del catálogo.
    pub fn read(&self) -> SelectedFilters {
        let filters = self.active_filters();
        let mut categories = BTreeMap::new();
        for category in &filters.categories {
            let codes: Vec<String> = category
                .codes
                .iter()
                .filter(|code| self.is_selected(category.category, code))
                .cloned()
                .collect();
            if !codes.is_empty() {
                categories.insert(category.category, codes);
            }
        }
        SelectedFilters {
            word_type: Some(self.word_type.code().to_string()),
            categories,
        }
    }

    pub fn sections(&self) -> Vec<FilterSection> {
        generate_sections(self.active_filters(), self)
    }
}
