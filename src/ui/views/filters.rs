use crate::QuizApp;
use crate::model::FilterCategory;
use crate::ui::helpers::toggle_row;
use egui::{Context, ScrollArea, SidePanel};

pub fn ui_filters(app: &mut QuizApp, ctx: &Context) {
    SidePanel::left("filters_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                // Las secciones se regeneran en cada frame a partir del estado
                let sections = app.filters.sections();
                let mut clicked: Option<(FilterCategory, String)> = None;

                for section in &sections {
                    let heading_key = format!("heading_{}", section.category.code());
                    let heading = app
                        .localization
                        .lookup(&heading_key, app.settings.ui_language)
                        .map(str::to_owned)
                        .unwrap_or_else(|| section.heading.clone());

                    ui.add_space(6.0);
                    ui.strong(heading);
                    let buttons: Vec<(String, String, bool)> = section
                        .buttons
                        .iter()
                        .map(|b| (b.code.clone(), b.label.clone(), b.selected))
                        .collect();
                    if let Some(code) = toggle_row(ui, &buttons) {
                        clicked = Some((section.category, code));
                    }
                }

                if let Some((category, code)) = clicked {
                    app.toggle_filter(category, &code);
                }
            });
        });
}
