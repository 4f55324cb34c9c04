// src/ui/helpers.rs
use egui::{Button, RichText, Ui};

/// Botón que se queda marcado mientras está seleccionado.
pub fn toggle_button(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let text = if selected {
        RichText::new(label).strong()
    } else {
        RichText::new(label)
    };
    ui.add(Button::new(text).selected(selected)).clicked()
}

/// Fila de botones (código, etiqueta, seleccionado).
/// Devuelve el código del botón pulsado, si alguno.
pub fn toggle_row(ui: &mut Ui, buttons: &[(String, String, bool)]) -> Option<String> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for (code, label, selected) in buttons {
            if toggle_button(ui, label, *selected) {
                clicked = Some(code.clone());
            }
        }
    });
    clicked
}
