use std::path::Path;

use image::RgbaImage;

/// RGBA color, 8 bits per channel
pub type Rgba8 = [u8; 4];

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Rgba8),

    /// Draw pixel at (x, y)
    Pixel { x: i32, y: i32, color: Rgba8 },

    /// Draw line from (x1, y1) to (x2, y2)
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8 },

    /// Draw filled circle at (cx, cy) with radius
    FilledCircle { cx: i32, cy: i32, radius: i32, color: Rgba8 },

    /// Fill a closed polygon (even-odd rule)
    FilledPolygon { points: Vec<(i32, i32)>, color: Rgba8 },
}

/// Pixel buffer with queued draw operations
///
/// Coordinates may lie outside the canvas; anything off-canvas is clipped.
#[derive(Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, initially transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 4;

        Self {
            pixels: vec![0; size],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Queue a draw operation in place
    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    /// Execute single draw operation (mutates internal state)
    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear(color) => self.clear(*color),
            DrawOp::Pixel { x, y, color } => self.set_pixel(*x, *y, *color),
            DrawOp::Line { x1, y1, x2, y2, color } => self.draw_line(*x1, *y1, *x2, *y2, *color),
            DrawOp::FilledCircle { cx, cy, radius, color } => {
                self.draw_filled_circle(*cx, *cy, *radius, *color)
            }
            DrawOp::FilledPolygon { points, color } => self.fill_polygon(points, *color),
        }
    }

    fn clear(&mut self, color: Rgba8) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Set single pixel, ignoring off-canvas coordinates
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }

    fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba8) {
        let r_sq = radius * radius;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw line using Bresenham's algorithm, clipped to the canvas
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
        let Some((x1, y1, x2, y2)) = self.clip_line(x1, y1, x2, y2) else {
            return;
        };
        let (mut x, mut y) = (x1, y1);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment against the canvas rectangle
    ///
    /// Keeps Bresenham from walking millions of off-canvas pixels when a
    /// projected point lands far outside the frame.
    fn clip_line(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<(i32, i32, i32, i32)> {
        let (x1f, y1f) = (x1 as f64, y1 as f64);
        let (dx, dy) = ((x2 - x1) as f64, (y2 - y1) as f64);
        let (xmax, ymax) = ((self.width as f64 - 1.0).max(0.0), (self.height as f64 - 1.0).max(0.0));

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let edges = [(-dx, x1f), (dx, xmax - x1f), (-dy, y1f), (dy, ymax - y1f)];

        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((
            (x1f + t0 * dx).round() as i32,
            (y1f + t0 * dy).round() as i32,
            (x1f + t1 * dx).round() as i32,
            (y1f + t1 * dy).round() as i32,
        ))
    }

    /// Scanline fill sampling pixel centers
    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgba8) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                let (ayf, byf) = (ay as f32, by as f32);
                if (ayf <= sample_y) != (byf <= sample_y) {
                    let t = (sample_y - ayf) / (byf - ayf);
                    crossings.push(ax as f32 + t * (bx - ax) as f32);
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0) as i32;
                let end = ((span[1] - 0.5).floor() as i32).min(self.width as i32 - 1);
                for x in start..=end {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Convert executed pixels into an image buffer
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Encode the executed pixels as PNG
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)
    }
}
