use crate::QuizApp;
use crate::app::QuizPhase;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, Grid, Key, RichText, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let visibility = app.session.visibility();

    centered_panel(ctx, 320.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            if visibility.loading {
                ui.add_space(10.0);
                ui.spinner();
                ui.label(app.t("loading"));
                return;
            }

            if !visibility.question {
                ui.heading(app.t("greeting"));
                return;
            }

            // Error de carga: se muestra en el hueco de la pregunta
            if let QuizPhase::Failed { title, detail } = app.session.phase() {
                ui.heading(RichText::new(title.as_str()).color(Color32::LIGHT_RED));
                ui.add_space(6.0);
                ui.label(detail.as_str());
                return;
            }

            if let Some(view) = app.session.question_view() {
                ui.heading(view.prompt.as_str());
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    Grid::new("question_details").striped(true).show(ui, |ui| {
                        for (label, value) in &view.details {
                            ui.strong(*label);
                            ui.label(value.as_str());
                            ui.end_row();
                        }
                    });
                });
            }

            ui.add_space(10.0);
            let hint = app.t("answer_hint");
            let response = ui.add(
                TextEdit::singleline(&mut app.session.input)
                    .hint_text(hint)
                    .desired_width(320.0)
                    .interactive(visibility.submit),
            );

            // Enter: envía si se ve "Submit", si no pasa a la siguiente pregunta
            let enter = ui.input(|i| i.key_pressed(Key::Enter));
            let nothing_focused = ui.memory(|m| m.focused().is_none());
            if enter && (response.lost_focus() || nothing_focused) {
                app.handle_enter();
                response.request_focus();
            }

            ui.add_space(6.0);
            if visibility.submit {
                let submit = ui.add_enabled(
                    app.session.can_submit(),
                    Button::new(app.t("submit")).min_size(egui::vec2(160.0, 32.0)),
                );
                if submit.clicked() {
                    app.submit_answer();
                }
                if app.session.is_checking() {
                    ui.spinner();
                }
            }
            if visibility.next {
                let next = ui.add(Button::new(app.t("next_question")).min_size(egui::vec2(160.0, 32.0)));
                if next.clicked() {
                    app.start_new_quiz();
                }
            }

            if visibility.feedback {
                ui.add_space(10.0);
                feedback_block(app, ui);
            }
        });
    });
}

fn feedback_block(app: &QuizApp, ui: &mut egui::Ui) {
    if let Some(error) = app.session.check_error() {
        ui.colored_label(Color32::LIGHT_RED, app.localization.lookup("error_checking", app.settings.ui_language).unwrap_or(error));
        return;
    }
    let Some(feedback) = app.session.feedback() else {
        return;
    };

    if feedback.correct {
        ui.label(
            RichText::new(format!("✅ {}", app.t("correct")))
                .color(Color32::LIGHT_GREEN)
                .strong(),
        );
        ui.label(format!("{}: \"{}\"", app.t("your_answer"), feedback.user_answer));
    } else {
        ui.label(
            RichText::new(format!("❌ {}", app.t("incorrect")))
                .color(Color32::LIGHT_RED)
                .strong(),
        );
        ui.label(format!("{}: \"{}\"", app.t("your_answer"), feedback.user_answer));
        ui.label(format!("{}: \"{}\"", app.t("correct_answer"), feedback.correct_answer));
    }
}
