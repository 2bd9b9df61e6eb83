//! The rendering engine boundary

use munsell_solid_core::{PlacedPoint, Result, Vector3f};

/// Initial scene configuration handed to an engine at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Initial scene rotation in radians around each axis
    pub rotation: Vector3f,
    pub zoom: f32,
    /// Whether the engine's own drag-to-rotate input handling is enabled
    pub drag_rotate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Fixed downward tilt so the solid is seen slightly from above.
            rotation: Vector3f::new(-std::f32::consts::TAU / 12.0, 0.0, 0.0),
            zoom: 2.0,
            drag_rotate: true,
        }
    }
}

/// Scene-graph engine consumed by the illustration controller.
///
/// Implementations are expected to be driven from a single thread; drag
/// events are delivered between frames, so [`RenderEngine::poll_drag_started`]
/// observed at a frame boundary sees every gesture exactly once.
pub trait RenderEngine {
    /// Register a point with the scene. Registration is append-only and
    /// order-independent.
    fn add_point(&mut self, point: &PlacedPoint);

    /// Current scene rotation in radians
    fn rotation(&self) -> Vector3f;

    /// Overwrite the scene rotation
    fn set_rotation(&mut self, rotation: Vector3f);

    /// Recompute the render graph and present the frame
    fn render(&mut self) -> Result<()>;

    /// True once for each drag gesture begun since the last poll
    fn poll_drag_started(&mut self) -> bool;
}
