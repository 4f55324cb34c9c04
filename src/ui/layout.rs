use crate::QuizApp;
use crate::filter_sections::word_type_section;
use crate::model::WordType;
use crate::ui::helpers::toggle_row;
use egui::{CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.heading(app.t("app_title"));
            ui.separator();

            // Tipo de palabra: selección única
            let section = word_type_section(&app.filters);
            ui.label(app.t("word_type"));
            let labels: Vec<(String, String, bool)> = section
                .buttons
                .iter()
                .map(|b| {
                    let key = format!("word_type_{}", b.code);
                    let label = app
                        .localization
                        .lookup(&key, app.settings.ui_language)
                        .map(str::to_owned)
                        .unwrap_or_else(|| b.label.clone());
                    (b.code.clone(), label, b.selected)
                })
                .collect();
            if let Some(code) = toggle_row(ui, &labels) {
                if let Ok(word_type) = WordType::from_code(&code) {
                    app.select_word_type(word_type);
                }
            }

            ui.separator();
            if ui.button(format!("▶ {}", app.t("start_quiz"))).clicked() {
                app.start_new_quiz();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("⚙ {}", app.t("settings"))).clicked() {
                    app.show_settings = !app.show_settings;
                }
                let other = match app.settings.ui_language {
                    crate::localization::UiLanguage::En => "VL",
                    crate::localization::UiLanguage::Vl => "EN",
                };
                if ui
                    .button(format!("🌐 {other}"))
                    .on_hover_text(app.t("language"))
                    .clicked()
                {
                    app.cambiar_idioma();
                    ctx.request_repaint();
                }
            });
        });
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button(app.t("dark_mode")).clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button(app.t("light_mode")).clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
