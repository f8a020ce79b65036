//! Interactive Penrose P2 tiling viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the generated tiling and the
//! UI state (pan/zoom, animation, stroke options) and implements
//! [`eframe::App`] to render and control the tiling.
//!
//! The core stays pure: the tiling buffer produced by
//! [`generate_p2_tiling`] is retained as-is, and the spin animation only
//! tracks an accumulated angle which is applied to each vertex at draw
//! time. Nothing is reallocated or mutated per frame.

use eframe::App;
use glam::Vec2;
use penrose_core::{
    error::GeometryError, tiling::generate_p2_tiling, triangle::TileColor, types::Tiling,
};
use std::f32::consts::TAU;

/// Logical surface the tiling is generated for; pan/zoom maps it to the
/// actual window.
const SURFACE_W: f32 = 600.0;
const SURFACE_H: f32 = 400.0;

/// Deflation passes on startup. 6 gives a dense tiling that still
/// regenerates instantly.
const DEFAULT_GENERATIONS: u32 = 6;

/// Upper bound exposed in the UI; growth per pass approaches Φ², so
/// anything beyond this stops being interactive.
const MAX_GENERATIONS: u32 = 9;

/// Fill colour for a tile, keyed by its tag.
///
/// The geometry core only knows the two-variant tag; the mapping to
/// display colours lives here.
fn fill_color(color: TileColor) -> egui::Color32 {
    match color {
        TileColor::Red => egui::Color32::from_rgb(0xc8, 0x3c, 0x3c),
        TileColor::Blue => egui::Color32::from_rgb(0x3c, 0x64, 0xc8),
    }
}

/// Outline colour shared by both tiles.
const OUTLINE: egui::Color32 = egui::Color32::from_rgb(0x28, 0x28, 0x28);

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions (generation count, pan/zoom, toggles).
/// 2. If `running`, advance the rotation angle by `speed * dt`.
/// 3. Draw every triangle, rotated by the current angle about the
///    surface centre.
pub struct Viewer {
    tiling: Tiling,
    generations: u32,

    angle: f32,
    running: bool,
    /// Rotation speed in radians per second.
    speed: f32,

    /// Stroke only the two legs `b -> a -> c` of each triangle, leaving the
    /// spine between the two halves of a kite/dart invisible.
    hide_seams: bool,

    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a viewer with a freshly generated tiling at
    /// [`DEFAULT_GENERATIONS`].
    pub fn new() -> Result<Self, GeometryError> {
        let tiling = generate_p2_tiling(SURFACE_W, SURFACE_H, DEFAULT_GENERATIONS)?;
        log::info!(
            "generated initial tiling: {} generations, {} triangles",
            DEFAULT_GENERATIONS,
            tiling.len()
        );

        Ok(Self {
            tiling,
            generations: DEFAULT_GENERATIONS,
            angle: 0.0,
            running: false,
            speed: 0.2,
            hide_seams: true,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
        })
    }

    /// Centre of the logical surface; the seed apex and the animation pivot.
    fn surface_centre() -> Vec2 {
        Vec2::new(SURFACE_W / 2.0, SURFACE_H / 2.0)
    }

    /// Regenerates the tiling for the current generation count.
    ///
    /// On failure the previous tiling is kept; generation only fails for
    /// degenerate geometry, which a valid seed never produces.
    fn regenerate(&mut self) {
        match generate_p2_tiling(SURFACE_W, SURFACE_H, self.generations) {
            Ok(tiling) => {
                log::info!(
                    "regenerated tiling: {} generations, {} triangles",
                    self.generations,
                    tiling.len()
                );
                self.tiling = tiling;
            }
            Err(e) => log::error!("tiling regeneration failed: {e}"),
        }
    }

    /// Converts a surface-space position to screen-space.
    ///
    /// Surface coordinates are centred on the window, scaled by `zoom` and
    /// offset by `pan`. The surface is y-down like the screen, so no axis
    /// flip is involved.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        let d = p - Self::surface_centre();
        egui::pos2(
            center.x + d.x * self.zoom + self.pan.x,
            center.y + d.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] up to floating-point rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (p.y - center.y - self.pan.y) / self.zoom;
        Vec2::new(x, y) + Self::surface_centre()
    }

    /// Builds the top panel UI (animation controls, generations, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Spin" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.speed)
                        .prefix("speed = ")
                        .suffix(" rad/s")
                        .range(-2.0..=2.0)
                        .speed(0.01),
                );

                if ui.button("Reset angle").clicked() {
                    self.angle = 0.0;
                }

                ui.separator();

                let before = self.generations;
                ui.add(
                    egui::DragValue::new(&mut self.generations)
                        .prefix("generations = ")
                        .range(0..=MAX_GENERATIONS)
                        .speed(0.05),
                );
                if self.generations != before {
                    self.regenerate();
                }

                ui.separator();
                ui.checkbox(&mut self.hide_seams, "Hide seams");
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (triangle counts, current angle).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("angle = {:.2} rad", self.angle));
                ui.separator();
                let red = self
                    .tiling
                    .iter()
                    .filter(|t| t.color == TileColor::Red)
                    .count();
                ui.label(format!("triangles = {}", self.tiling.len()));
                ui.label(format!("red = {red}"));
                ui.label(format!("blue = {}", self.tiling.len() - red));
            });
        });
    }

    /// Builds the central panel where the tiling is drawn and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Advance the spin before drawing so the frame shows the
            // up-to-date angle.
            if self.running {
                let dt = ctx.input(|i| i.stable_dt);
                self.angle = (self.angle + self.speed * dt) % TAU;
                ctx.request_repaint();
            }

            self.draw_tiling(&painter, rect);
        });
    }

    /// Draws every triangle, rotated by the current angle about the
    /// surface centre.
    ///
    /// Each triangle is filled with its own colour regardless of draw
    /// order. The outline is either the closed triangle, or only the two
    /// legs `b -> a -> c` when seam hiding is on, so the internal spine of
    /// each kite/dart pair is not drawn.
    fn draw_tiling(&self, painter: &egui::Painter, rect: egui::Rect) {
        let pivot = Self::surface_centre();
        let stroke = egui::Stroke::new(1.0, OUTLINE);

        for t in &self.tiling {
            let rotated = t.rotated(self.angle, pivot);
            let a = self.world_to_screen(rotated.a, rect);
            let b = self.world_to_screen(rotated.b, rect);
            let c = self.world_to_screen(rotated.c, rect);

            painter.add(egui::Shape::convex_polygon(
                vec![a, b, c],
                fill_color(t.color),
                egui::Stroke::NONE,
            ));

            if self.hide_seams {
                painter.add(egui::Shape::line(vec![b, a, c], stroke));
            } else {
                painter.add(egui::Shape::closed_line(vec![a, b, c], stroke));
            }
        }
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
