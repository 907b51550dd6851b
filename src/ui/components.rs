// Reusable UI components
// Buttons, banners, price tags, and chat bubbles shared by the panels

use eframe::egui;
use crate::catalog::CatalogItem;
use crate::chat::{Message, MessageRole};
use crate::currency::format_usd;
use crate::state::Notice;

const DISCOUNT_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(120, 30, 30);

/// What the user did with the notice banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Nothing clicked
    None,
    /// "Retry" clicked
    Retry,
    /// Banner closed
    Dismiss,
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).strong())
}

/// Render a secondary button
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(text)
}

/// Render the failure banner with Retry (when possible) and Dismiss
pub fn notice_banner(ui: &mut egui::Ui, notice: &Notice) -> NoticeAction {
    let mut action = NoticeAction::None;
    egui::Frame::none()
        .fill(ERROR_FILL)
        .rounding(4.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::WHITE, &notice.message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if secondary_button(ui, "Dismiss").clicked() {
                        action = NoticeAction::Dismiss;
                    }
                    if notice.retry_query.is_some() && primary_button(ui, "Retry").clicked() {
                        action = NoticeAction::Retry;
                    }
                });
            });
        });
    action
}

/// Old price (struck through), discount, and current price of one item
pub fn price_tag(ui: &mut egui::Ui, item: &CatalogItem) {
    ui.horizontal_wrapped(|ui| {
        if let Some(old) = item.old_price_usd {
            ui.label(egui::RichText::new(format_usd(old)).strikethrough().weak());
        }
        if let Some(off) = item.product.off_percent {
            ui.label(egui::RichText::new(format!("({}% Off)", off)).color(DISCOUNT_COLOR));
        }
    });
    ui.label(
        egui::RichText::new(format_usd(item.current_price_usd))
            .strong()
            .size(15.0),
    );
}

/// One chat transcript entry; user turns right-aligned
pub fn message_bubble(ui: &mut egui::Ui, message: &Message) {
    let (align, fill) = match message.role {
        MessageRole::User => (egui::Align::Max, ui.visuals().selection.bg_fill),
        MessageRole::Assistant => (egui::Align::Min, ui.visuals().faint_bg_color),
    };
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.85);
                ui.label(&message.content);
            });
    });
    ui.add_space(4.0);
}
