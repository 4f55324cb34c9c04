mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuestas HTTP llegadas desde el último frame
        self.poll_remote();

        // BARRA SUPERIOR: siempre visible, también con error de carga
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        views::filters::ui_filters(self, ctx);
        views::quiz::ui_quiz(self, ctx);

        if self.show_settings {
            views::settings::ui_settings(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.settings);
    }
}
