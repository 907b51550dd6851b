// Filters panel
// Edits the local filter draft; nothing is committed until Apply

use eframe::egui;
use crate::catalog::{CATEGORIES, SIZES};
use crate::state::FilterDraft;
use crate::ui::components::{primary_button, secondary_button};

/// Button pressed in the filters panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltersAction {
    /// Nothing clicked
    None,
    /// Commit the draft
    Apply,
    /// Clear the draft and the active filters
    Reset,
}

/// Render the filters panel
pub fn render_filters_panel(ui: &mut egui::Ui, draft: &mut FilterDraft) -> FiltersAction {
    let mut action = FiltersAction::None;
    let min_invalid = draft.price_min_invalid();
    let max_invalid = draft.price_max_invalid();

    ui.heading("Filters");
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    egui::Grid::new("filters_grid")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("Min Price");
            price_input(ui, &mut draft.price_min, "Min price", min_invalid);
            ui.end_row();

            ui.label("Max Price");
            price_input(ui, &mut draft.price_max, "Max price", max_invalid);
            ui.end_row();

            ui.label("Category");
            egui::ComboBox::from_id_source("category_filter")
                .selected_text(draft.category.as_deref().unwrap_or("All Categories"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.category, None, "All Categories");
                    for category in CATEGORIES {
                        ui.selectable_value(&mut draft.category, Some(category.to_string()), category);
                    }
                });
            ui.end_row();

            ui.label("Size");
            egui::ComboBox::from_id_source("size_filter")
                .selected_text(draft.size.as_deref().unwrap_or("All Sizes"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.size, None, "All Sizes");
                    for size in SIZES {
                        ui.selectable_value(&mut draft.size, Some(size.to_string()), size);
                    }
                });
            ui.end_row();
        });

    if min_invalid || max_invalid {
        let warn = ui.visuals().warn_fg_color;
        ui.colored_label(warn, "Prices must be numbers; invalid boxes are ignored");
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if primary_button(ui, "Apply Filters").clicked() {
            action = FiltersAction::Apply;
        }
        if secondary_button(ui, "Reset").clicked() {
            action = FiltersAction::Reset;
        }
    });

    action
}

fn price_input(ui: &mut egui::Ui, value: &mut String, hint: &str, invalid: bool) {
    let mut edit = egui::TextEdit::singleline(value)
        .hint_text(hint)
        .desired_width(100.0);
    if invalid {
        let error = ui.visuals().error_fg_color;
        edit = edit.text_color(error);
    }
    ui.add(edit);
}
