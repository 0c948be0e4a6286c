//! Content-area rendering for `StudioApp`.
//!
//! Contains three methods:
//!
//! - `draw_content`: per-frame study update, rasterize, upload, paint
//! - `draw_merge_buttons`: overlay buttons riding the round-merge circles
//! - `draw_stats_panel`: right-side statistics panel

use eframe::egui;
use glam::Vec2;

use super::StudioApp;
use crate::studies::{FrameInput, StudyKind};

impl StudioApp {
    // ── Canvas ───────────────────────────────────────────────────────────────

    /// Render the central canvas: advance the active study by one frame,
    /// rasterize it, and stretch the texture over the panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let response = ui.allocate_response(
            ui.available_size(),
            egui::Sense::click_and_drag().union(egui::Sense::hover()),
        );
        let rect = response.rect;
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return;
        }

        let input = FrameInput {
            t: self.app_start.elapsed().as_secs_f32(),
            hovered: response.hovered(),
            pointer_ndc: response.hover_pos().map(|pos| {
                Vec2::new(
                    ((pos.x - rect.left()) / rect.width()) * 2.0 - 1.0,
                    -(((pos.y - rect.top()) / rect.height()) * 2.0 - 1.0),
                )
            }),
            aspect: rect.width() / rect.height(),
            clicked: response.clicked(),
        };

        let (w, h) = self.render_size();
        let page = self.page_color();

        let render_start = std::time::Instant::now();
        let pixels = match self.study {
            StudyKind::Gooey => {
                self.gooey.update(&input);
                self.gooey.render(w, h)
            }
            StudyKind::Morph => {
                self.morph.update(&input);
                self.morph.render(w, h, page)
            }
            StudyKind::Merge => {
                self.merge.update(&input);
                self.merge.render(w, h)
            }
            StudyKind::Lerp => {
                self.lerp.update(&input);
                self.lerp.render(w, h)
            }
            StudyKind::ShapeMorph => {
                self.shape_morph.update(&input);
                self.shape_morph.render(w, h)
            }
            StudyKind::Squircles => {
                self.squircles.update(&input);
                self.squircles.render(w, h)
            }
            StudyKind::Flat => {
                self.flat.update(&input);
                self.flat.render(w, h, page)
            }
            StudyKind::Blobs => {
                self.blobs.update(&input);
                self.blobs.render(w, h, page)
            }
        };
        self.last_render = render_start.elapsed();

        let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &pixels);
        self.canvas_texture =
            Some(ctx.load_texture("study_canvas", image, egui::TextureOptions::LINEAR));
        self.last_frame = Some((pixels, w, h));

        if let Some(ref tex) = self.canvas_texture {
            ui.painter().image(
                tex.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if self.study == StudyKind::Merge {
            self.draw_merge_buttons(ui, rect);
        }
    }

    // ── Overlay buttons ──────────────────────────────────────────────────────

    /// The round-merge study carries two labeled buttons pinned to the
    /// circle centers; feedback values come from the study's eased state.
    fn draw_merge_buttons(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let (left, right) = self.merge.button_anchors();
        let buttons = [
            ("Menu", left, self.merge.left_feedback()),
            ("Profile", right, self.merge.right_feedback()),
        ];

        for (label, anchor, (hover, click)) in buttons {
            let center = egui::pos2(rect.left() + rect.width() * anchor, rect.center().y);
            let radius = 30.0 * (1.0 + 0.1 * hover - 0.15 * click);

            let fill = if click > 0.5 {
                egui::Color32::from_rgba_unmultiplied(0, 255, 0, 102)
            } else if hover > 0.5 {
                egui::Color32::from_rgba_unmultiplied(255, 255, 0, 76)
            } else {
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 25)
            };
            let stroke = if hover > 0.5 {
                egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 0, 204))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 76))
            };

            painter.circle(center, radius, fill, stroke);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
    }

    // ── Stats side panel ─────────────────────────────────────────────────────

    /// Render the right-side statistics panel: the live eased values of the
    /// active study, then frame timing.
    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        ui.heading(self.study.label());
        ui.separator();

        let lines = match self.study {
            StudyKind::Gooey => self.gooey.stats(),
            StudyKind::Morph => self.morph.stats(),
            StudyKind::Merge => self.merge.stats(),
            StudyKind::Lerp => self.lerp.stats(),
            StudyKind::ShapeMorph => self.shape_morph.stats(),
            StudyKind::Squircles => self.squircles.stats(),
            StudyKind::Flat => self.flat.stats(),
            StudyKind::Blobs => self.blobs.stats(),
        };
        for line in lines {
            ui.label(line);
        }

        ui.separator();
        ui.heading("Frame");
        let snap = self.metrics.snapshot();
        ui.label(format!("Frames: {}", snap.frames));
        ui.label(format!("Avg: {:.1} ms", snap.avg_frame_ms));
        ui.label(format!("Worst: {:.1} ms", snap.worst_frame_ms));
        ui.label(format!("Raster: {:.1} ms", snap.avg_render_ms));

        let (w, h) = self.render_size();
        ui.colored_label(
            egui::Color32::from_rgb(0, 180, 0),
            format!("Rasterized: {}x{}", w, h),
        );

        if self.exporter.pending_count() > 0 {
            ui.separator();
            ui.label(format!("Exporting: {}", self.exporter.pending_count()));
        }
        if self.exporter.completed_count() > 0 {
            ui.label(format!("Saved: {}", self.exporter.completed_count()));
        }
    }
}
