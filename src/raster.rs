use crate::error::SolarError;
use crate::model::Vec2;

pub(crate) const SCREEN_WIDTH: i32 = 320;
pub(crate) const SCREEN_HEIGHT: i32 = 200;

/// Off-screen surface of palette-index bytes, row-major, cleared to palette
/// 0 at the start of every tick.
pub(crate) struct FrameBuffer {
    px: Vec<u8>,
}

impl FrameBuffer {
    pub(crate) fn new() -> Self {
        Self {
            px: vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub(crate) fn clear(&mut self) {
        self.px.fill(0);
    }

    pub(crate) fn try_set(&mut self, x: i32, y: i32, color: u8) -> Result<(), SolarError> {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return Err(SolarError::PixelOutOfBounds { x, y });
        }
        self.px[(y * SCREEN_WIDTH + x) as usize] = color;
        Ok(())
    }

    /// Clipping plot: writes off the surface are dropped.
    pub(crate) fn set(&mut self, x: i32, y: i32, color: u8) {
        let _ = self.try_set(x, y, color);
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return 0;
        }
        self.px[(y * SCREEN_WIDTH + x) as usize]
    }
}

// One sqrt per scan step, mirrored into all eight octants; no per-pixel trig.
fn plot8(fb: &mut FrameBuffer, center: Vec2, dx: i32, dy: i32, color: u8) {
    fb.set(center.x + dx, center.y + dy, color);
    fb.set(center.x - dx, center.y + dy, color);
    fb.set(center.x + dx, center.y - dy, color);
    fb.set(center.x - dx, center.y - dy, color);
    fb.set(center.x + dy, center.y + dx, color);
    fb.set(center.x - dy, center.y + dx, color);
    fb.set(center.x + dy, center.y - dx, color);
    fb.set(center.x - dy, center.y - dx, color);
}

/// Circle outline used for orbit paths. The termination test runs after the
/// increment, so radius 0 plots exactly the center pixel and tiny radii stay
/// sparse rather than closing into a textbook midpoint circle.
pub(crate) fn draw_orbit(fb: &mut FrameBuffer, center: Vec2, radius: u16, color: u8) {
    let r2 = radius as f32 * radius as f32;
    let mut dy: i32 = 0;
    loop {
        let dx = (r2 - (dy * dy) as f32).sqrt().floor() as i32;
        plot8(fb, center, dx, dy, color);
        dy += 1;
        if dy >= dx {
            break;
        }
    }
}

/// Filled disc via nested octant sweeps, not a scanline fill. The fill
/// cursor carries across outer passes: row `fy` is swept exactly once, at
/// half-width floor(sqrt(r^2 - (fy+1)^2)), then mirrored eight ways. This
/// undersamples near the boundary at small radii.
pub(crate) fn draw_disc(fb: &mut FrameBuffer, center: Vec2, radius: u16, color: u8) {
    let r2 = radius as f32 * radius as f32;
    let mut fill_y: i32 = 0;
    let mut dy: i32 = 0;
    loop {
        let dx = (r2 - (dy * dy) as f32).sqrt().floor() as i32;
        while fill_y < dy {
            let mut fill_x = 0;
            while fill_x < dx {
                plot8(fb, center, fill_x, fill_y, color);
                fill_x += 1;
            }
            fill_y += 1;
        }
        dy += 1;
        if dy >= dx {
            break;
        }
    }
}
