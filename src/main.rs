mod app;
mod error;
mod model;
mod raster;
mod render;
mod sim;
mod term;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
