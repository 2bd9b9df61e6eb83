//! The illustration controller and its spin state machine

use crate::clock::FrameClock;
use crate::engine::RenderEngine;
use munsell_solid_core::{ColorSample, Result, SolidLayout};

/// Radians of automatic rotation per frame
pub const DEFAULT_SPIN_RATE: f32 = 0.02;

/// Whether the illustration spins on its own or the user has taken over.
///
/// The transition to `UserControlled` happens on the first drag gesture
/// and is irreversible for the lifetime of the illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Spinning,
    UserControlled,
}

/// Controller that places color samples in a scene and drives the
/// continuous-rotation animation over a [`RenderEngine`].
#[derive(Debug)]
pub struct Illustration<E: RenderEngine> {
    engine: E,
    layout: SolidLayout,
    state: SpinState,
    rotation_y: f32,
    spin_rate: f32,
}

impl<E: RenderEngine> Illustration<E> {
    pub fn new(engine: E, layout: SolidLayout) -> Self {
        Self {
            engine,
            layout,
            state: SpinState::Spinning,
            rotation_y: 0.0,
            spin_rate: DEFAULT_SPIN_RATE,
        }
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Place every sample and register it with the engine. An empty
    /// sequence registers nothing; the animation still runs over an
    /// empty scene.
    pub fn add_samples(&mut self, samples: &[ColorSample]) {
        for sample in samples {
            self.engine.add_point(&self.layout.place(sample));
        }
    }

    /// Advance the animation by one frame.
    ///
    /// A drag gesture latches the state to user control. While spinning,
    /// the y rotation advances by the spin rate; afterwards the engine's
    /// rotation is left entirely to its own drag handling. The frame is
    /// presented unconditionally.
    pub fn step(&mut self) -> Result<()> {
        if self.engine.poll_drag_started() {
            self.state = SpinState::UserControlled;
        }
        if self.state == SpinState::Spinning {
            self.rotation_y += self.spin_rate;
            let mut rotation = self.engine.rotation();
            rotation.y = self.rotation_y;
            self.engine.set_rotation(rotation);
        }
        self.engine.render()
    }

    /// Drive the animation until the clock runs out of frames
    pub fn run(&mut self, clock: &mut impl FrameClock) -> Result<()> {
        while clock.next_frame() {
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameBudget;
    use crate::engine::EngineConfig;
    use crate::headless::HeadlessEngine;
    use approx::assert_relative_eq;
    use munsell_solid_core::ColorSample;

    fn illustration() -> Illustration<HeadlessEngine> {
        Illustration::new(HeadlessEngine::default(), SolidLayout::default())
    }

    #[test]
    fn test_samples_are_placed_and_registered() {
        let mut illo = illustration();
        illo.add_samples(&[
            ColorSample::new(0, 5.0, 2.0, "#ff0000"),
            ColorSample::new(10, 5.0, 0.0, "#777777"),
        ]);

        let points = illo.engine().points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].position.x, 15.0);
        assert_eq!(points[0].color, "#ff0000");
        // Zero chroma collapses onto the vertical axis, whatever the hue.
        assert_eq!(points[1].position.x, 0.0);
        assert_eq!(points[1].position.z, 0.0);
    }

    #[test]
    fn test_spinning_advances_rotation_each_step() {
        let mut illo = illustration();
        for _ in 0..5 {
            illo.step().unwrap();
        }
        assert_eq!(illo.state(), SpinState::Spinning);
        assert_relative_eq!(illo.rotation_y(), 5.0 * DEFAULT_SPIN_RATE, epsilon = 1e-6);
        assert_relative_eq!(illo.engine().rotation().y, 5.0 * DEFAULT_SPIN_RATE, epsilon = 1e-6);
        // The initial tilt is untouched by the spin.
        assert_relative_eq!(
            illo.engine().rotation().x,
            EngineConfig::default().rotation.x
        );
        assert_eq!(illo.engine().frames_presented(), 5);
    }

    #[test]
    fn test_drag_latches_user_control() {
        let mut illo = illustration();
        illo.step().unwrap();
        illo.engine_mut().begin_drag();
        illo.step().unwrap();
        assert_eq!(illo.state(), SpinState::UserControlled);

        // Rotation freezes, frames keep presenting, and no later step
        // resumes the spin.
        let frozen = illo.rotation_y();
        for _ in 0..10 {
            illo.step().unwrap();
        }
        assert_eq!(illo.state(), SpinState::UserControlled);
        assert_eq!(illo.rotation_y(), frozen);
        assert_eq!(illo.engine().frames_presented(), 12);
    }

    #[test]
    fn test_user_rotation_not_stomped_after_latch() {
        let mut illo = illustration();
        illo.engine_mut().begin_drag();
        illo.step().unwrap();

        // The user keeps rotating through the engine's own drag handling.
        let mut rotation = illo.engine().rotation();
        rotation.y = 1.5;
        illo.engine_mut().set_rotation(rotation);
        illo.step().unwrap();
        assert_eq!(illo.engine().rotation().y, 1.5);
    }

    #[test]
    fn test_empty_scene_still_animates() {
        let mut illo = illustration();
        illo.add_samples(&[]);
        let mut clock = FrameBudget::new(3);
        illo.run(&mut clock).unwrap();

        assert!(illo.engine().points().is_empty());
        assert_eq!(illo.engine().frames_presented(), 3);
        assert_relative_eq!(illo.rotation_y(), 3.0 * DEFAULT_SPIN_RATE, epsilon = 1e-6);
    }

    #[test]
    fn test_custom_spin_rate() {
        let mut illo = illustration().with_spin_rate(0.1);
        illo.step().unwrap();
        assert_relative_eq!(illo.rotation_y(), 0.1);
    }
}
