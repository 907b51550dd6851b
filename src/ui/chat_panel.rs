// Chat panel
// Transcript view plus the input row for the shopping assistant

use eframe::egui;
use crate::chat::ChatSession;
use crate::ui::components::{message_bubble, primary_button};

/// Render the chat panel; returns true when the user asked to send
pub fn render_chat_panel(ui: &mut egui::Ui, session: &mut ChatSession) -> bool {
    let mut send = false;

    ui.heading("Assistant");
    ui.add_space(4.0);
    ui.separator();

    let input_height = 40.0;
    egui::ScrollArea::vertical()
        .id_source("chat_scroll")
        .auto_shrink([false; 2])
        .max_height(transcript_height(ui.available_height(), input_height))
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if session.messages().is_empty() {
                ui.label(egui::RichText::new("Ask about products, sizes or budgets").weak());
            }
            for message in session.messages() {
                message_bubble(ui, message);
            }
            if session.is_waiting() {
                ui.spinner();
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut session.input)
                .hint_text("Ask a question...")
                .desired_width(ui.available_width() - 60.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            input.request_focus();
        }
        if primary_button(ui, "Send").clicked() {
            send = true;
        }
    });

    send
}

/// Height left for the transcript once the input row is reserved
fn transcript_height(available: f32, input_height: f32) -> f32 {
    (available - input_height).max(0.0)
}
