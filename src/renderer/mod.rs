//! Canvas-2d rendering module
//!
//! The render collaborator: resolves logical sprite ids to preloaded
//! images and blits the sim's [`DrawList`] in order. Also the asset
//! collaborator - sprite dimensions come from the loaded images (halved:
//! the art is authored at 2x for retina displays).

use std::collections::HashMap;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::sim::{DrawList, SpriteId, SpriteMetrics};

/// Blits sprites onto a 2d canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: HashMap<SpriteId, HtmlImageElement>,
    viewport: Vec2,
    device_pixel_ratio: f64,
}

impl CanvasRenderer {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        images: HashMap<SpriteId, HtmlImageElement>,
        viewport: Vec2,
        device_pixel_ratio: f64,
    ) -> Self {
        Self {
            ctx,
            images,
            viewport,
            device_pixel_ratio,
        }
    }

    /// Clear the canvas and set up the retina transform. The backing
    /// store is device-pixel sized; all draw calls are in CSS pixels.
    pub fn begin_frame(&self) {
        self.ctx.save();
        let _ = self
            .ctx
            .scale(self.device_pixel_ratio, self.device_pixel_ratio);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.x as f64,
            self.viewport.y as f64,
        );
    }

    /// Blit every draw call in list order (later entries on top)
    pub fn draw(&self, list: &DrawList) {
        for call in list.sprites() {
            let Some(image) = self.images.get(&call.sprite) else {
                // Load-before-play violated; skip rather than throw
                log::warn!("sprite {:?} not loaded, skipping draw", call.sprite);
                continue;
            };
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                call.pos.x as f64,
                call.pos.y as f64,
                call.size.x as f64,
                call.size.y as f64,
            );
        }
    }

    /// Score readout in the last sixth of the canvas width
    pub fn draw_score(&self, score: u64) {
        self.ctx.set_font("16px Jua, sans-serif");
        self.ctx.set_fill_style_str("blue");
        let x = (self.viewport.x - self.viewport.x / 6.0) as f64;
        let _ = self.ctx.fill_text(&format!("Score: {}", score), x, 20.0);
    }

    pub fn end_frame(&self) {
        self.ctx.restore();
    }
}

impl SpriteMetrics for CanvasRenderer {
    fn dimensions(&self, sprite: SpriteId) -> Vec2 {
        match self.images.get(&sprite) {
            Some(image) => Vec2::new(
                image.natural_width() as f32 / 2.0,
                image.natural_height() as f32 / 2.0,
            ),
            None => {
                log::warn!("sprite {:?} not loaded, reporting zero size", sprite);
                Vec2::ZERO
            }
        }
    }
}
