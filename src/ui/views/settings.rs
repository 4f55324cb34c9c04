use crate::QuizApp;
use crate::answer_utils::NormalizationScope;
use crate::config::AnswerCheckMode;
use crate::localization::UiLanguage;
use crate::model::WordType;
use egui::{ComboBox, Context, TextEdit, Window};

pub fn ui_settings(app: &mut QuizApp, ctx: &Context) {
    let mut open = app.show_settings;
    let title = app.t("settings");

    Window::new(title)
        .id(egui::Id::new("settings_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(app.t("server_url"));
                let response = ui.add(TextEdit::singleline(&mut app.server_url_draft).desired_width(240.0));
                let ok = ui.button("OK").clicked();
                if response.lost_focus() || ok {
                    app.apply_server_url();
                }
            });

            let ignore_label = app.t("ignore_filters");
            ui.checkbox(&mut app.settings.ignore_filters, ignore_label);

            let mut normalize_both = app.settings.normalization == NormalizationScope::Both;
            let normalize_label = app.t("normalize_both");
            if ui.checkbox(&mut normalize_both, normalize_label).changed() {
                app.settings.normalization = if normalize_both {
                    NormalizationScope::Both
                } else {
                    NormalizationScope::UserOnly
                };
            }

            let mut server_check = app.settings.answer_check == AnswerCheckMode::Server;
            let server_check_label = app.t("server_check");
            if ui.checkbox(&mut server_check, server_check_label).changed() {
                app.settings.answer_check = if server_check {
                    AnswerCheckMode::Server
                } else {
                    AnswerCheckMode::Local
                };
            }

            ComboBox::from_label(app.t("language"))
                .selected_text(app.settings.ui_language.label())
                .show_ui(ui, |ui| {
                    for lang in [UiLanguage::En, UiLanguage::Vl] {
                        ui.selectable_value(&mut app.settings.ui_language, lang, lang.label());
                    }
                });

            // Tipo de palabra con el que arranca la próxima sesión
            ComboBox::from_label(app.t("word_type"))
                .selected_text(app.settings.initial_word_type.code())
                .show_ui(ui, |ui| {
                    for word_type in WordType::ALL {
                        ui.selectable_value(
                            &mut app.settings.initial_word_type,
                            word_type,
                            word_type.code(),
                        );
                    }
                });
        });

    app.show_settings = open;
}
