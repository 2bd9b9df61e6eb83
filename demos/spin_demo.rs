//! Spin the color solid on a headless engine
//!
//! Loads a rendering dataset, places every color in the solid, and runs
//! the auto-spin animation for a frame budget, simulating a user drag
//! partway through to show the one-way handover to user control.

use clap::Parser;
use munsell_solid_core::SolidLayout;
use munsell_solid_io::read_samples;
use munsell_solid_visualization::{FrameBudget, HeadlessEngine, Illustration};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Animate the Munsell color solid without a display", long_about = None)]
struct Cli {
    /// Rendering dataset to load
    #[arg(default_value = "munsell_real.json")]
    dataset: PathBuf,

    /// Number of frames to run before the simulated drag
    #[arg(long, default_value_t = 120)]
    spin_frames: usize,

    /// Number of frames to run after the simulated drag
    #[arg(long, default_value_t = 60)]
    drag_frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let samples = read_samples(&cli.dataset)?;
    println!("Plotting {} colors", samples.len());

    let mut illo = Illustration::new(HeadlessEngine::default(), SolidLayout::default());
    illo.add_samples(&samples);

    illo.run(&mut FrameBudget::new(cli.spin_frames))?;
    println!(
        "After {} frames: rotation.y = {:.3} rad, state = {:?}",
        illo.engine().frames_presented(),
        illo.rotation_y(),
        illo.state()
    );

    illo.engine_mut().begin_drag();
    illo.run(&mut FrameBudget::new(cli.drag_frames))?;
    println!(
        "After {} frames: rotation.y = {:.3} rad, state = {:?}",
        illo.engine().frames_presented(),
        illo.rotation_y(),
        illo.state()
    );

    Ok(())
}
