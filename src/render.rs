use crate::model::SolarSystem;
use crate::raster::{draw_disc, draw_orbit, FrameBuffer};

/// One frame: clear to palette 0, every orbit path, then every body on top.
/// Orbit outlines are centered on the parent's current position. Table
/// order inside each pass, so a later body can occlude an earlier one.
pub(crate) fn render_frame(fb: &mut FrameBuffer, system: &SolarSystem) {
    fb.clear();

    for body in system.bodies.iter() {
        if let Some(parent) = body.orbit_center {
            let center = system.bodies[parent.index()].pos;
            draw_orbit(fb, center, body.orbit_radius, body.orbit_color);
        }
    }

    for body in system.bodies.iter() {
        draw_disc(fb, body.pos, body.radius as u16, body.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BodyId, SolarSystem};
    use crate::raster::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn rendered() -> FrameBuffer {
        let mut system = SolarSystem::new();
        system.place_at_start(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut fb = FrameBuffer::new();
        render_frame(&mut fb, &system);
        fb
    }

    #[test]
    fn sun_disc_covers_the_screen_center() {
        let fb = rendered();
        assert_eq!(fb.get(160, 100), 44);
    }

    #[test]
    fn bodies_paint_over_their_own_orbit_path() {
        // Mercury starts at phase 0, exactly on its orbit circle; the disc
        // pass must win over the orbit pass at that pixel.
        let fb = rendered();
        let mercury = SolarSystem::new().bodies[BodyId::Mercury.index()];
        assert_eq!(fb.get(180, 100), mercury.color);
    }

    #[test]
    fn uncovered_orbit_pixels_keep_the_orbit_color() {
        let fb = rendered();
        // Mercury's orbit crosses the Sun's negative x axis at radius 20,
        // clear of every disc at startup.
        assert_eq!(fb.get(140, 100), 1);
        // Venus' orbit, same side.
        assert_eq!(fb.get(120, 100), 1);
    }

    #[test]
    fn every_frame_starts_from_a_cleared_buffer() {
        let mut system = SolarSystem::new();
        system.place_at_start(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut fb = FrameBuffer::new();
        fb.set(0, 0, 200);
        render_frame(&mut fb, &system);
        assert_eq!(fb.get(0, 0), 0);
    }
}
