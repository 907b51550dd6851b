// Search bar
// Free-text input that submits only on button click or Enter

use eframe::egui;
use crate::state::SearchDraft;
use crate::ui::components::primary_button;

/// Render the search bar; returns the query when the user submits
pub fn render_search_bar(ui: &mut egui::Ui, draft: &mut SearchDraft) -> Option<String> {
    let mut submitted = false;
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut draft.query)
                .hint_text("Search for products...")
                .desired_width(ui.available_width() - 90.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
        if primary_button(ui, "Search").clicked() {
            submitted = true;
        }
    });
    submitted.then(|| draft.query.clone())
}
