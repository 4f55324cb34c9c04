use serde::{Deserialize, Serialize};

/// Vocales dobles que el usuario escribe en lugar de la vocal larga.
const DIGRAPHS: [(&str, &str); 6] = [
    ("aa", "ā"),
    ("ii", "ī"),
    ("ee", "ē"),
    ("oo", "ō"),
    ("uu", "ū"),
    ("yy", "ȳ"),
];

/// A qué respuestas se aplica la normalización de vocales largas.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NormalizationScope {
    #[default]
    UserOnly,
    Both,
}

/// Pasa a minúsculas y convierte las vocales dobles en vocales con macron.
pub fn normalize_answer(input: &str) -> String {
    let mut text = input.to_lowercase();
    loop {
        let mut changed = false;
        for (pair, long) in DIGRAPHS {
            if text.contains(pair) {
                text = text.replace(pair, long);
                changed = true;
            }
        }
        if !changed {
            return text;
        }
    }
}

/// Posibles formas correctas, separadas por "/" en la respuesta del servidor.
pub fn answer_candidates(correct: &str) -> Vec<&str> {
    correct
        .split('/')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Compara la respuesta del usuario con cada forma aceptada, sin distinguir mayúsculas.
pub fn matches_any_form(user: &str, correct: &str, scope: NormalizationScope) -> bool {
    let user = normalize_answer(user.trim());
    answer_candidates(correct).into_iter().any(|candidate| {
        let candidate = match scope {
            NormalizationScope::UserOnly => candidate.to_lowercase(),
            NormalizationScope::Both => normalize_answer(candidate),
        };
        candidate == user
    })
}
