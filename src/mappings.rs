// src/mappings.rs
//
// Tablas de correspondencia entre etiquetas legibles y códigos de la base de datos.

use crate::model::FilterCategory;

/// Pares (etiqueta, código). Los valores combinados como "lun/sol" son códigos atómicos.
const CASE_PAIRS: &[(&str, &str)] = &[
    ("nominative", "nom"),
    ("accusative", "acc"),
    ("genitive", "gen"),
    ("dative", "dat"),
    ("locative", "loc"),
    ("instrumental", "ins"),
    ("comitative", "com"),
    ("vocative", "voc"),
    ("adverbial", "adv"),
];

const QUANTITY_PAIRS: &[(&str, &str)] = &[
    ("singular", "sing"),
    ("plural", "pl"),
    ("paucal", "pau"),
    ("collective", "col"),
];

const GENDER_PAIRS: &[(&str, &str)] = &[
    ("lunar", "lun"),
    ("solar", "sol"),
    ("terrestrial", "ter"),
    ("aquatic", "aq"),
    ("lunar/solar", "lun/sol"),
    ("terrestrial/aquatic", "ter/aq"),
    ("n/a", "n/a"),
];

const D_TYPE_PAIRS: &[(&str, &str)] = &[
    ("positive", "pos"),
    ("equative", "eq"),
    ("comparative", "comp"),
    ("superlative", "super"),
];

const POSITION_PAIRS: &[(&str, &str)] = &[
    ("prepositive", "prepos"),
    ("postpositive", "postpos"),
];

pub fn pairs(category: FilterCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        FilterCategory::Case => CASE_PAIRS,
        FilterCategory::Quantity => QUANTITY_PAIRS,
        FilterCategory::Gender => GENDER_PAIRS,
        FilterCategory::DType => D_TYPE_PAIRS,
        FilterCategory::Position => POSITION_PAIRS,
        // Declinación, clase y tipo de palabra se muestran tal cual
        FilterCategory::Declension | FilterCategory::Class | FilterCategory::WordType => &[],
    }
}

/// Etiqueta legible -> código. Si no hay entrada devuelve la entrada sin cambios.
pub fn to_code(category: FilterCategory, display: &str) -> String {
    pairs(category)
        .iter()
        .find(|(label, _)| *label == display)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| display.to_string())
}

/// Código -> etiqueta legible. Si no hay entrada devuelve el código sin cambios.
pub fn to_display(category: FilterCategory, code: &str) -> String {
    pairs(category)
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn map_values<S: AsRef<str>>(category: FilterCategory, values: &[S], into_code: bool) -> Vec<String> {
    values
        .iter()
        .map(|v| {
            if into_code {
                to_code(category, v.as_ref())
            } else {
                to_display(category, v.as_ref())
            }
        })
        .collect()
}
