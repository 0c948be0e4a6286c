//! `StudioApp`: the top-level egui application state.
//!
//! This module declares the `StudioApp` struct, its `Default` impl, and the
//! per-frame `eframe::App` wiring. Panel contents are split across the
//! sibling sub-modules:
//!
//! - `toolbar`: study selector, color scheme, view toggles, export
//! - `content`: canvas update, rasterization into a texture, overlays

pub mod content;
pub mod toolbar;

use std::time::{Duration, Instant};

use eframe::egui;

use crate::export::FrameExporter;
use crate::studies::blobs::BlobsStudy;
use crate::studies::flat::FlatStudy;
use crate::studies::gooey::GooeyStudy;
use crate::studies::morph::MorphStudy;
use crate::studies::ops::{LerpStudy, MergeStudy, ShapeMorphStudy};
use crate::studies::squircles::SquirclesStudy;
use crate::studies::StudyKind;
use crate::telemetry::FrameMetrics;

/// Page color behind the canvases, light and dark.
pub const LIGHT_PAGE: [f32; 3] = [250.0 / 255.0, 250.0 / 255.0, 252.0 / 255.0];
pub const DARK_PAGE: [f32; 3] = [24.0 / 255.0, 24.0 / 255.0, 30.0 / 255.0];

pub struct StudioApp {
    pub study: StudyKind,
    pub show_stats: bool,
    pub dark_mode: bool,
    // Studies keep their eased state while hidden
    pub gooey: GooeyStudy,
    pub morph: MorphStudy,
    pub merge: MergeStudy,
    pub lerp: LerpStudy,
    pub shape_morph: ShapeMorphStudy,
    pub squircles: SquirclesStudy,
    pub flat: FlatStudy,
    pub blobs: BlobsStudy,
    pub metrics: FrameMetrics,
    pub exporter: FrameExporter,
    pub canvas_texture: Option<egui::TextureHandle>,
    /// Most recent rasterized frame, kept for export: pixels, width, height.
    pub last_frame: Option<(Vec<u8>, usize, usize)>,
    pub last_render: Duration,
    pub app_start: Instant,
    pub last_frame_time: Instant,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            study: StudyKind::default(),
            show_stats: true,
            dark_mode: false,
            gooey: GooeyStudy::new(),
            morph: MorphStudy::new(),
            merge: MergeStudy::new(),
            lerp: LerpStudy::new(),
            shape_morph: ShapeMorphStudy::new(),
            squircles: SquirclesStudy::new(),
            flat: FlatStudy::new(),
            blobs: BlobsStudy::new(),
            metrics: FrameMetrics::new(),
            exporter: FrameExporter::new(),
            canvas_texture: None,
            last_frame: None,
            last_render: Duration::ZERO,
            app_start: Instant::now(),
            last_frame_time: Instant::now(),
        }
    }
}

impl StudioApp {
    /// Raster target for the active study. The raymarched background runs
    /// at a quarter of the area the 2-D studies use.
    pub fn render_size(&self) -> (usize, usize) {
        match self.study {
            StudyKind::Blobs => (320, 240),
            _ => (640, 480),
        }
    }

    pub fn page_color(&self) -> [f32; 3] {
        if self.dark_mode {
            DARK_PAGE
        } else {
            LIGHT_PAGE
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame_start = Instant::now();
        let period = frame_start - self.last_frame_time;
        self.last_frame_time = frame_start;

        self.exporter.poll();

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, ctx);
        });

        self.metrics.record(period, self.last_render);

        // The studies animate continuously
        ctx.request_repaint();
    }
}
