// src/filter_sections.rs
//
// Genera los grupos de botones de filtro a partir del catálogo.
// No guarda nada: la UI los vuelve a generar en cada frame.

use crate::data::WordTypeFilters;
use crate::filters::FilterState;
use crate::mappings::to_display;
use crate::model::{FilterCategory, WordType};

#[derive(Clone, Debug, PartialEq)]
pub struct FilterButton {
    pub code: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterSection {
    pub category: FilterCategory,
    pub heading: String,
    pub buttons: Vec<FilterButton>,
}

pub fn heading_for(category: FilterCategory) -> String {
    match category {
        FilterCategory::DType => "Adj Declension Type".to_string(),
        FilterCategory::WordType => "Word Type".to_string(),
        other => capitalize_first(other.code()),
    }
}

pub fn button_label(category: FilterCategory, code: &str) -> String {
    match (category, code) {
        (FilterCategory::Gender | FilterCategory::Declension, "lun/sol") => "Lunar/Solar".to_string(),
        (FilterCategory::Gender | FilterCategory::Declension, "ter/aq") => {
            "Terrestrial/Aquatic".to_string()
        }
        _ => capitalize_first(&to_display(category, code)),
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Una sección por categoría del tipo de palabra activo.
pub fn generate_sections(filters: &WordTypeFilters, state: &FilterState) -> Vec<FilterSection> {
    filters
        .categories
        .iter()
        .map(|category| FilterSection {
            category: category.category,
            heading: heading_for(category.category),
            buttons: category
                .codes
                .iter()
                .map(|code| FilterButton {
                    code: code.clone(),
                    label: button_label(category.category, code),
                    selected: state.is_selected(category.category, code),
                })
                .collect(),
        })
        .collect()
}

/// Grupo de selección única para el tipo de palabra.
pub fn word_type_section(state: &FilterState) -> FilterSection {
    FilterSection {
        category: FilterCategory::WordType,
        heading: heading_for(FilterCategory::WordType),
        buttons: WordType::ALL
            .iter()
            .map(|word_type| FilterButton {
                code: word_type.code().to_string(),
                label: capitalize_first(word_type.code()),
                selected: state.word_type() == *word_type,
            })
            .collect(),
    }
}
