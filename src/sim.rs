use crate::model::{SolarSystem, NUM_BODIES};
use std::f32::consts::PI;

/// Base per-tick multiplier; the operator's speed input scales it.
pub(crate) const BASE_ANGLE_SCALE: f32 = 0.01;

/// The run is exactly this many animated ticks after the initial frame.
pub(crate) const TOTAL_TICKS: u32 = 16385;

pub(crate) struct Simulation {
    pub(crate) system: SolarSystem,
    pub(crate) angle_scale: f32,
}

impl Simulation {
    pub(crate) fn new(speed: f32) -> Self {
        Self {
            system: SolarSystem::new(),
            angle_scale: BASE_ANGLE_SCALE * speed,
        }
    }

    /// One tick of orbital motion, in table order so a satellite reads the
    /// position its parent holds at this point in the walk. The Sun is
    /// skipped. A phase stepping outside [0, 2pi] is reset to exactly 0 --
    /// not wrapped -- so fast bodies visibly snap back to the x axis.
    pub(crate) fn advance(&mut self) {
        for i in 0..NUM_BODIES {
            let parent = match self.system.bodies[i].orbit_center {
                Some(p) => p,
                None => continue,
            };
            let center = self.system.bodies[parent.index()].pos;
            let body = &mut self.system.bodies[i];

            let mut next = body.orbital_angle + body.orbital_vel * self.angle_scale;
            if next < 0.0 || next > 2.0 * PI {
                next = 0.0;
            }

            let r = body.orbit_radius as f32;
            body.pos.x = center.x + (next.cos() * r).round() as i32;
            body.pos.y = center.y + (next.sin() * r).round() as i32;
            body.orbital_angle = next;
        }
    }
}
