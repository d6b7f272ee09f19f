// ui.rs - egui front-end: controls, grid painter, HUD, and key handling

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::PATTERNS;

use crate::app::App;

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_keys(ctx, now);
        self.maybe_step(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("chairflyer");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.paused { "▶ Start" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.toggle_pause(now);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.paused = true;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.paused = true;
                    self.reseed();
                    self.status = String::from("seeded random");
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.paused = true;
                    self.apply_pattern(self.selected_pattern);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.cadence.interval().as_secs_f32();
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.cadence
                        .set_interval(Duration::from_secs_f32(1.0 / speed));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells while paused to toggle them.");
            ui.label("Space/P pause · N next level · D debug · M mute · Esc quit");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            // Statistics
            let total = self.grid.height() * self.grid.width();
            let live = self.grid.live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
            });

            ui.separator();

            // Bottom status line: debug shows the status text, otherwise lives
            ui.horizontal(|ui| {
                if self.debug {
                    ui.label(format!("Status: {}", self.status));
                } else {
                    ui.label(format!("Lives: {}", self.player.lives()));
                }
                ui.separator();
                ui.label(format!("Score: {}", self.player.points()));
                ui.label(format!("Level: {}", self.player.level()));
                if self.mute {
                    ui.separator();
                    ui.label("muted");
                }
            });
        });

        if !self.paused {
            ctx.request_repaint();
        }
    }
}

impl App {
    fn handle_keys(&mut self, ctx: &egui::Context, now: Instant) {
        let (quit, pause, level, debug, mute) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::Escape),
                input.key_pressed(egui::Key::Space) || input.key_pressed(egui::Key::P),
                input.key_pressed(egui::Key::N),
                input.key_pressed(egui::Key::D),
                input.key_pressed(egui::Key::M) || input.key_pressed(egui::Key::S),
            )
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if pause {
            self.toggle_pause(now);
        }
        if level {
            self.next_level();
        }
        if debug {
            self.debug = !self.debug;
        }
        if mute {
            self.mute = !self.mute;
            self.status = String::from(if self.mute { "muted" } else { "unmuted" });
        }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let rows = self.grid.height();
        let cols = self.grid.width();
        let pitch = BOX_SIZE + SPACING;
        let total_size = Vec2::new(
            pitch * cols as f32 - SPACING,
            pitch * rows as f32 - SPACING,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        // Cells are editable only while paused
        if self.paused && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - origin.x) / pitch) as usize;
                let row = ((pos.y - origin.y) / pitch) as usize;
                self.toggle_cell(row, col);
            }
        }

        for (row, col, alive) in self.grid.iter() {
            let min = egui::pos2(
                origin.x + col as f32 * pitch,
                origin.y + row as f32 * pitch,
            );
            let rect = Rect::from_min_size(min, Vec2::splat(BOX_SIZE));
            let color = if alive { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 1.0, color);
            painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
        }
    }
}
