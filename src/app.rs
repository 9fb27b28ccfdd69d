use crate::error::SolarError;
use crate::raster::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::render_frame;
use crate::sim::{Simulation, TOTAL_TICKS};
use crate::term::{pace, Surface};
use std::io;

pub(crate) fn run() -> anyhow::Result<()> {
    println!("Enter the speed at which you want to run the simulation.");
    println!("Enter a negative value for a reverse simulation.");

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    // Bad input freezes the simulation instead of aborting the run.
    let speed = parse_speed(&line).unwrap_or(0.0);

    let mut sim = Simulation::new(speed);
    sim.system.place_at_start(SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut surface = Surface::enter()?;
    let res = run_loop(&mut surface, &mut sim);
    surface.leave()?;
    res
}

/// The animated run: one initial frame, then exactly `TOTAL_TICKS` rounds
/// of render, present, advance, pace.
fn run_loop(surface: &mut Surface, sim: &mut Simulation) -> anyhow::Result<()> {
    let mut fb = FrameBuffer::new();

    render_frame(&mut fb, &sim.system);
    surface.present(&fb)?;

    for _ in 0..TOTAL_TICKS {
        render_frame(&mut fb, &sim.system);
        surface.present(&fb)?;
        sim.advance();
        pace();
    }

    Ok(())
}

fn parse_speed(line: &str) -> Result<f32, SolarError> {
    let trimmed = line.trim();
    trimmed
        .parse::<f32>()
        .map_err(|_| SolarError::InvalidSpeedInput {
            input: trimmed.to_string(),
        })
}
