// Main application layout
// Search bar on top, filters on the left, assistant on the right, products in the middle

use eframe::egui;
use crate::state::{AppState, Command};
use crate::ui::chat_panel::render_chat_panel;
use crate::ui::components::{notice_banner, NoticeAction};
use crate::ui::filters_panel::{render_filters_panel, FiltersAction};
use crate::ui::product_list::render_product_list;
use crate::ui::search_bar::render_search_bar;

/// Render the main application layout
///
/// Returns the commands triggered by user input this frame.
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
        ui.add_space(8.0);
        if render_search_bar(ui, &mut state.search_draft).is_some() {
            commands.push(state.submit_search());
        }
        ui.add_space(8.0);
    });

    egui::SidePanel::left("filters_sidebar")
        .resizable(true)
        .default_width(240.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            match render_filters_panel(ui, &mut state.filter_draft) {
                FiltersAction::Apply => state.apply_filter_draft(),
                FiltersAction::Reset => state.reset_filters(),
                FiltersAction::None => {}
            }
        });

    egui::SidePanel::right("chat_sidebar")
        .resizable(true)
        .default_width(320.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            if render_chat_panel(ui, &mut state.chat) {
                commands.extend(state.send_chat_message());
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(notice) = state.notice().cloned() {
            match notice_banner(ui, &notice) {
                NoticeAction::Retry => commands.extend(state.retry()),
                NoticeAction::Dismiss => state.dismiss_notice(),
                NoticeAction::None => {}
            }
            ui.add_space(8.0);
        }

        let total = state.products().len();
        let searching = state.is_searching();
        let visible = state.visible_products();
        render_product_list(ui, &visible, total, searching);
    });

    commands
}
