//! Toolbar rendering for `StudioApp`.
//!
//! Draws the study selector, the color-scheme picker for the gallery
//! studies, the stats and dark-mode toggles, and the export button.

use eframe::egui;

use super::StudioApp;
use crate::studies::ops::ColorScheme;
use crate::studies::StudyKind;

impl StudioApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Study selector
            let prev_study = self.study;
            egui::ComboBox::from_id_salt("study")
                .selected_text(self.study.label())
                .show_ui(ui, |ui| {
                    for kind in StudyKind::ALL {
                        ui.selectable_value(&mut self.study, kind, kind.label());
                    }
                });
            if self.study != prev_study {
                // Drop the stale texture until the new study renders
                self.canvas_texture = None;
                self.last_frame = None;
            }

            // Scheme picker, only for the canvases that have one
            match self.study {
                StudyKind::Merge => scheme_picker(ui, &mut self.merge.scheme),
                StudyKind::Lerp => scheme_picker(ui, &mut self.lerp.scheme),
                _ => {}
            }

            ui.toggle_value(&mut self.show_stats, "Stats");

            // Dark mode toggle
            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }

            if ui.button("Save PNG").clicked() {
                if let Some((ref pixels, w, h)) = self.last_frame {
                    let prefix = format!(
                        "nowrk-{}",
                        self.study.label().to_lowercase().replace(' ', "-")
                    );
                    let path = self.exporter.save(&prefix, w as u32, h as u32, pixels.clone());
                    log::debug!("queued export to {}", path.display());
                }
            }
        });
    }
}

fn scheme_picker(ui: &mut egui::Ui, scheme: &mut ColorScheme) {
    egui::ComboBox::from_id_salt("scheme")
        .selected_text(scheme.label())
        .show_ui(ui, |ui| {
            for s in ColorScheme::ALL {
                ui.selectable_value(scheme, s, s.label());
            }
        });
}
