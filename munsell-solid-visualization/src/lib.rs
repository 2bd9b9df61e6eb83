//! Visualization control for the Munsell color solid
//!
//! This crate drives the spinning point-cloud illustration:
//! - The [`RenderEngine`] boundary trait over whatever scene-graph
//!   library presents the points
//! - The [`FrameClock`] scheduling trait that paces the animation loop
//! - The [`Illustration`] controller that places samples and owns the
//!   auto-spin state machine
//! - A [`HeadlessEngine`] for tests and demos

pub mod clock;
pub mod engine;
pub mod headless;
pub mod illustration;

pub use clock::*;
pub use engine::*;
pub use headless::*;
pub use illustration::*;
