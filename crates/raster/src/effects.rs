use rand::Rng;

use crate::Canvas;

impl Canvas {
    /// A Gaussian-blurred copy of this canvas.
    pub fn blurred(&self, sigma: f32) -> Canvas {
        Canvas::from_image(image::imageops::blur(self.image(), sigma))
    }

    /// Film grain: perturb `samples` random pixels by a uniform value in
    /// ±`amplitude`, applied to all three color channels and clamped.
    /// Alpha is untouched.
    pub fn grain<R: Rng>(&mut self, rng: &mut R, samples: u32, amplitude: i16) {
        if amplitude <= 0 {
            return;
        }
        let (w, h) = (self.width(), self.height());
        let amp = amplitude as i32;
        let img = self.image_mut();
        for _ in 0..samples {
            let x = rng.gen_range(0..w);
            let y = rng.gen_range(0..h);
            let n = rng.gen_range(-amp..=amp);
            let p = img.get_pixel_mut(x, y);
            for c in &mut p.0[..3] {
                *c = (*c as i32 + n).clamp(0, 255) as u8;
            }
        }
    }

    /// Darken color channels radially toward the edges. `start` is the
    /// normalized radius (unit = half the smaller dimension) where the
    /// falloff begins; `strength` is the fraction removed at the far
    /// corner. Alpha is untouched.
    pub fn vignette(&mut self, start: f32, strength: f32) {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 || strength <= 0.0 {
            return;
        }
        let (cx, cy) = ((w - 1) as f32 / 2.0, (h - 1) as f32 / 2.0);
        let unit = (w.min(h) as f32) / 2.0;
        let span = (1.0 - start).max(f32::EPSILON);
        let img = self.image_mut();
        for (x, y, p) in img.enumerate_pixels_mut() {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            let norm = (dx * dx + dy * dy).sqrt() / unit;
            let t = ((norm - start) / span).clamp(0.0, 1.0);
            if t == 0.0 {
                continue;
            }
            let factor = 1.0 - strength * t;
            for c in &mut p.0[..3] {
                *c = (*c as f32 * factor).round() as u8;
            }
        }
    }
}
