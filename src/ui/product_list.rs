// Product list view
// Pure rendering of the filtered catalog; holds no state of its own

use eframe::egui;
use crate::catalog::CatalogItem;
use crate::ui::components::price_tag;

const CARD_WIDTH: f32 = 180.0;
const IMAGE_HEIGHT: f32 = 160.0;

/// Render the product grid with a "Showing X of Y" header
pub fn render_product_list(ui: &mut egui::Ui, items: &[&CatalogItem], total: usize, searching: bool) {
    ui.horizontal(|ui| {
        ui.label(format!("Showing {} of {} products", items.len(), total));
        if searching {
            ui.spinner();
        }
    });
    ui.add_space(4.0);
    ui.separator();

    if items.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("No products match").italics().weak().size(14.0));
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("product_list_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for item in items {
                    product_card(ui, item);
                }
            });
        });
}

fn product_card(ui: &mut egui::Ui, item: &CatalogItem) {
    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            match item.product.primary_image() {
                Some(url) => {
                    ui.add(
                        egui::Image::from_uri(url.to_string())
                            .max_width(CARD_WIDTH)
                            .max_height(IMAGE_HEIGHT)
                            .rounding(4.0),
                    );
                }
                None => {
                    ui.allocate_space(egui::vec2(CARD_WIDTH, IMAGE_HEIGHT));
                }
            }
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&item.product.name).strong());
            price_tag(ui, item);
        });
    });
}
