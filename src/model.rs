use std::f32::consts::PI;

/// Integer screen-space coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Vec2 {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

// Nominal orbital rates, degrees per tick before the global scale.
// Both probes share one nominal constant.
const SP_MERCURY: f32 = 41.49;
const SP_VENUS: f32 = 16.26;
const SP_EARTH: f32 = 10.0;
const SP_MOON: f32 = 133.6;
const SP_PROBE: f32 = 60.0;
const SP_MARS: f32 = 5.32;

fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    MoonProbe,
    Mars,
    MarsProbe,
}

pub(crate) const NUM_BODIES: usize = 8;

impl BodyId {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct CelestialBody {
    pub(crate) pos: Vec2,
    // Self-rotation placeholders; configured but never read by physics or
    // rendering.
    #[allow(dead_code)]
    pub(crate) facing: f32,
    #[allow(dead_code)]
    pub(crate) facing_vel: f32,
    pub(crate) radius: u8,
    pub(crate) color: u8,
    /// Index of the body this one orbits; `None` exactly for the Sun.
    pub(crate) orbit_center: Option<BodyId>,
    /// Phase along the orbit in radians. Hard-reset to 0 when a tick would
    /// carry it outside [0, 2pi].
    pub(crate) orbital_angle: f32,
    /// Signed radians per tick before the global angle scale.
    pub(crate) orbital_vel: f32,
    pub(crate) orbit_radius: u16,
    pub(crate) orbit_color: u8,
}

/// The fixed eight-body table. Array order is part of the contract: parents
/// precede children (Sun, Mercury, Venus, Earth, Moon, MoonProbe, Mars,
/// MarsProbe), so walking the table front to back always sees a parent's
/// position updated before any of its satellites reads it.
pub(crate) struct SolarSystem {
    pub(crate) bodies: [CelestialBody; NUM_BODIES],
}

impl SolarSystem {
    pub(crate) fn new() -> Self {
        let orbiter = |parent: BodyId,
                       radius: u8,
                       color: u8,
                       orbit_radius: u16,
                       orbit_color: u8,
                       deg_per_tick: f32| CelestialBody {
            pos: Vec2 { x: 0, y: 0 },
            facing: 0.0,
            facing_vel: 10.0,
            radius,
            color,
            orbit_center: Some(parent),
            orbital_angle: 0.0,
            orbital_vel: deg_to_rad(deg_per_tick),
            orbit_radius,
            orbit_color,
        };

        let sun = CelestialBody {
            pos: Vec2 { x: 0, y: 0 },
            facing: 0.0,
            facing_vel: 0.0,
            radius: 10,
            color: 44,
            orbit_center: None,
            orbital_angle: 0.0,
            orbital_vel: 0.0,
            orbit_radius: 0,
            orbit_color: 0,
        };

        Self {
            bodies: [
                sun,
                orbiter(BodyId::Sun, 5, 66, 20, 1, SP_MERCURY),
                orbiter(BodyId::Sun, 6, 68, 40, 1, SP_VENUS),
                orbiter(BodyId::Sun, 6, 54, 65, 1, SP_EARTH),
                orbiter(BodyId::Earth, 4, 7, 11, 8, SP_MOON),
                orbiter(BodyId::Moon, 2, 92, 4, 19, SP_PROBE),
                orbiter(BodyId::Sun, 6, 41, 92, 1, SP_MARS),
                orbiter(BodyId::Mars, 2, 92, 7, 19, SP_PROBE),
            ],
        }
    }

    /// Sun to the screen center, every orbiter to phase 0 on the positive x
    /// axis of its parent, regardless of the stored `orbital_angle`.
    pub(crate) fn place_at_start(&mut self, width: i32, height: i32) {
        self.bodies[BodyId::Sun.index()].pos = Vec2 {
            x: width / 2,
            y: height / 2,
        };
        for i in 0..NUM_BODIES {
            if let Some(parent) = self.bodies[i].orbit_center {
                let center = self.bodies[parent.index()].pos;
                self.bodies[i].pos = Vec2 {
                    x: center.x + self.bodies[i].orbit_radius as i32,
                    y: center.y,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn exactly_one_root_and_parents_precede_children() {
        let sys = SolarSystem::new();
        let roots = sys
            .bodies
            .iter()
            .filter(|b| b.orbit_center.is_none())
            .count();
        assert_eq!(roots, 1);
        for (i, body) in sys.bodies.iter().enumerate() {
            if let Some(parent) = body.orbit_center {
                assert!(
                    parent.index() < i,
                    "body {} must come after its parent in the table",
                    i
                );
            }
        }
    }

    #[test]
    fn sun_sits_at_screen_center() {
        let mut sys = SolarSystem::new();
        sys.place_at_start(320, 200);
        assert_eq!(sys.bodies[BodyId::Sun.index()].pos, Vec2 { x: 160, y: 100 });
    }

    #[rstest]
    #[case(BodyId::Mercury, BodyId::Sun, 20)]
    #[case(BodyId::Venus, BodyId::Sun, 40)]
    #[case(BodyId::Earth, BodyId::Sun, 65)]
    #[case(BodyId::Moon, BodyId::Earth, 11)]
    #[case(BodyId::MoonProbe, BodyId::Moon, 4)]
    #[case(BodyId::Mars, BodyId::Sun, 92)]
    #[case(BodyId::MarsProbe, BodyId::Mars, 7)]
    fn placement_is_phase_zero_on_the_x_axis(
        #[case] body: BodyId,
        #[case] parent: BodyId,
        #[case] orbit_radius: i32,
    ) {
        let mut sys = SolarSystem::new();
        sys.place_at_start(320, 200);
        let b = sys.bodies[body.index()];
        let p = sys.bodies[parent.index()];
        assert_eq!(b.orbit_radius as i32, orbit_radius);
        assert_eq!(
            b.pos,
            Vec2 {
                x: p.pos.x + orbit_radius,
                y: p.pos.y
            }
        );
    }

    #[test]
    fn probes_share_the_nominal_rate() {
        let sys = SolarSystem::new();
        assert_eq!(
            sys.bodies[BodyId::MoonProbe.index()].orbital_vel,
            sys.bodies[BodyId::MarsProbe.index()].orbital_vel
        );
    }
}
