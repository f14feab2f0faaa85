// Pointer tracking for the canvas: surface-local position and whether the
// pointer is currently over the canvas

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PointerState {
    pub pos: Vector2<f64>,
    pub hovering: bool,
}

impl PointerState {
    /// Translate client coordinates into canvas space using the canvas' top-left corner
    pub fn on_move(&mut self, client_x: f64, client_y: f64, origin: Vector2<f64>) {
        self.pos = vecmath::vec2_sub([client_x, client_y], origin);
    }

    pub fn on_enter(&mut self) {
        self.hovering = true;
    }

    pub fn on_leave(&mut self) {
        self.hovering = false;
    }

    /// Where repulsion should come from this frame, if anywhere
    pub fn active_position(&self) -> Option<Vector2<f64>> {
        if self.hovering {
            Some(self.pos)
        } else {
            None
        }
    }
}
