//! A headless engine that records what it is asked to draw

use crate::engine::{EngineConfig, RenderEngine};
use munsell_solid_core::{PlacedPoint, Result, Vector3f};

/// Engine implementation with no display surface.
///
/// Registered points, the scene rotation, and the number of presented
/// frames are all observable, which makes this the engine of choice for
/// tests and terminal demos. Drag gestures are simulated through
/// [`HeadlessEngine::begin_drag`].
#[derive(Debug, Clone)]
pub struct HeadlessEngine {
    config: EngineConfig,
    points: Vec<PlacedPoint>,
    rotation: Vector3f,
    frames_presented: usize,
    pending_drag: bool,
}

impl HeadlessEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rotation: config.rotation,
            config,
            points: Vec::new(),
            frames_presented: 0,
            pending_drag: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn points(&self) -> &[PlacedPoint] {
        &self.points
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Simulate the start of a user drag gesture. Ignored when the engine
    /// was configured without drag rotation.
    pub fn begin_drag(&mut self) {
        if self.config.drag_rotate {
            self.pending_drag = true;
        }
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RenderEngine for HeadlessEngine {
    fn add_point(&mut self, point: &PlacedPoint) {
        self.points.push(point.clone());
    }

    fn rotation(&self) -> Vector3f {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Vector3f) {
        self.rotation = rotation;
    }

    fn render(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }

    fn poll_drag_started(&mut self) -> bool {
        std::mem::take(&mut self.pending_drag)
    }
}
