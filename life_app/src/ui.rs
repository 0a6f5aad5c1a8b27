// ui.rs - egui rendering and input for the presentation loop

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::app::{LifeApp, RunState};
use crate::config::CELL_SIZE;

const BACKGROUND: Color32 = Color32::from_gray(51);
const DEAD_COLOR: Color32 = Color32::from_gray(153);
const LIVE_COLOR: Color32 = Color32::WHITE;

/// Side of the drawn board in points.
pub fn board_side(size: usize) -> f32 {
    CELL_SIZE * size as f32
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.toggle_pause();
        }

        self.tick(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let side = board_side(self.grid().size());
                let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::click());
                let origin = response.rect.min;

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let offset = pos - origin;
                        if let Err(err) = self.click(offset.x, offset.y) {
                            log::error!("Click at {:?} rejected: {}", pos, err);
                        }
                    }
                }

                for (row, col, alive) in self.grid().cells() {
                    let min = origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
                    let rect = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));

                    // Live cells are filled, dead cells only outlined
                    if alive {
                        painter.rect_filled(rect, 0.0, LIVE_COLOR);
                    } else {
                        painter.rect_stroke(rect.shrink(0.5), 0.0, Stroke::new(1.0, DEAD_COLOR));
                    }
                }
            });

        if self.state() == RunState::Running {
            ctx.request_repaint_after(self.tick_interval());
        }
    }
}
