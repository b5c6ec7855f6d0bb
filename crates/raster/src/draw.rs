use types::Color;

use crate::Canvas;

impl Canvas {
    /// Fill the whole canvas with a top-to-bottom gradient, one lerped
    /// color per scanline.
    pub fn fill_vertical_gradient(&mut self, top: Color, bottom: Color) {
        let (w, h) = (self.width(), self.height());
        if h == 0 {
            return;
        }
        let denom = (h - 1).max(1) as f32;
        for y in 0..h {
            let t = y as f32 / denom;
            let c = lerp_color(top, bottom, t);
            for x in 0..w {
                self.put(x as i32, y as i32, c);
            }
        }
    }

    /// Fill an axis-aligned rectangle, corner coordinates inclusive.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend(x, y, color);
            }
        }
    }

    /// Fill an axis-aligned ellipse centered at (cx, cy).
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
        if rx <= 0 || ry <= 0 {
            return;
        }
        let (frx, fry) = (rx as f32, ry as f32);
        for y in (cy - ry)..=(cy + ry) {
            let dy = (y - cy) as f32 / fry;
            for x in (cx - rx)..=(cx + rx) {
                let dx = (x - cx) as f32 / frx;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Even-odd scanline fill of an arbitrary closed polygon.
    pub fn fill_polygon(&mut self, pts: &[(i32, i32)], color: Color) {
        if pts.len() < 3 {
            return;
        }
        let min_y = pts.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = pts
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(self.height() as i32 - 1);
        let mut xs: Vec<f32> = Vec::with_capacity(pts.len());
        for y in min_y..=max_y {
            // sample at the scanline center so vertices are not counted twice
            let yc = y as f32 + 0.5;
            xs.clear();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % pts.len()];
                let (fay, fby) = (ay as f32, by as f32);
                if (fay <= yc && yc < fby) || (fby <= yc && yc < fay) {
                    let t = (yc - fay) / (fby - fay);
                    xs.push(ax as f32 + t * (bx - ax) as f32);
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                let (start, end) = (pair[0].round() as i32, pair[1].round() as i32);
                for x in start..end {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// A line segment with round caps and the given stroke width.
    pub fn thick_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
        color: Color,
    ) {
        let half = width as f32 / 2.0;
        let pad = half.ceil() as i32 + 1;
        let (min_x, max_x) = (x0.min(x1) - pad, x0.max(x1) + pad);
        let (min_y, max_y) = (y0.min(y1) - pad, y0.max(y1) + pad);
        let limit = half * half;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if dist_sq_to_segment(x as f32, y as f32, x0 as f32, y0 as f32, x1 as f32, y1 as f32)
                    <= limit
                {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Fill a rounded rectangle, corner coordinates inclusive.
    pub fn fill_rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: u32,
        color: Color,
    ) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                if rounded_contains(x, y, x0, y0, x1, y1, radius as i32) {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Outline a rounded rectangle; the stroke extends `width` pixels
    /// inward from the edge.
    pub fn stroke_rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: u32,
        width: u32,
        color: Color,
    ) {
        let w = width as i32;
        let inner_r = (radius as i32 - w).max(0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let outer = rounded_contains(x, y, x0, y0, x1, y1, radius as i32);
                let inner =
                    rounded_contains(x, y, x0 + w, y0 + w, x1 - w, y1 - w, inner_r);
                if outer && !inner {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color::rgba(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
}

fn rounded_contains(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, r: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    if r <= 0 {
        return true;
    }
    // corner circle centers, pulled inward by the radius
    let cx = if x < x0 + r {
        x0 + r
    } else if x > x1 - r {
        x1 - r
    } else {
        return true;
    };
    let cy = if y < y0 + r {
        y0 + r
    } else if y > y1 - r {
        y1 - r
    } else {
        return true;
    };
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= r * r
}

fn dist_sq_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (abx, aby) = (bx - ax, by - ay);
    let (apx, apy) = (px - ax, py - ay);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(110, 120, 130);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5).r, 60);
    }

    #[test]
    fn rounded_rect_corner_cut() {
        // square 0..=99 with radius 20: the literal corner is outside
        assert!(!rounded_contains(0, 0, 0, 0, 99, 99, 20));
        assert!(rounded_contains(50, 50, 0, 0, 99, 99, 20));
        assert!(rounded_contains(0, 50, 0, 0, 99, 99, 20));
        // radius 0 degenerates to the plain rectangle
        assert!(rounded_contains(0, 0, 0, 0, 99, 99, 0));
    }

    #[test]
    fn segment_distance() {
        // point above the middle of a horizontal segment
        let d = dist_sq_to_segment(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 9.0).abs() < 1e-6);
        // beyond the end cap, distance is to the endpoint
        let d = dist_sq_to_segment(13.0, 4.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 25.0).abs() < 1e-6);
    }
}
