use super::constants::{
    CURSOR_DOT_OFFSET, CURSOR_DOT_SMOOTHING, CURSOR_GLOW_OFFSET, CURSOR_GLOW_SMOOTHING,
    CURSOR_HOVER_SCALE,
};
use glam::Vec2;

/// A point that chases a target by a fixed fraction of the remaining distance
/// every step (exponential smoothing).
#[derive(Debug, Clone, Copy)]
pub struct Follower {
    pub pos: Vec2,
    pub k: f32,
}

impl Follower {
    pub fn new(k: f32) -> Self {
        Self { pos: Vec2::ZERO, k }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.pos += (target - self.pos) * self.k;
    }
}

/// Pointer trail state: raw pointer, slow glow, fast dot, hover depth.
///
/// Hover is tracked as a depth counter so nested hover targets (a button
/// inside a `.card`) do not cancel each other; the glow transform is rebuilt
/// from scratch every frame.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    pointer: Vec2,
    glow: Follower,
    dot: Follower,
    hover_depth: u32,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            glow: Follower::new(CURSOR_GLOW_SMOOTHING),
            dot: Follower::new(CURSOR_DOT_SMOOTHING),
            hover_depth: 0,
        }
    }
}

impl CursorTrail {
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    #[cfg(test)]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[cfg(test)]
    pub fn glow(&self) -> Vec2 {
        self.glow.pos
    }

    #[cfg(test)]
    pub fn dot(&self) -> Vec2 {
        self.dot.pos
    }

    pub fn step(&mut self) {
        self.glow.step(self.pointer);
        self.dot.step(self.pointer);
    }

    pub fn enter_hover(&mut self) {
        self.hover_depth += 1;
    }

    pub fn leave_hover(&mut self) {
        self.hover_depth = self.hover_depth.saturating_sub(1);
    }

    pub fn is_hovering(&self) -> bool {
        self.hover_depth > 0
    }

    pub fn glow_transform(&self) -> String {
        let base = format!(
            "translate({}px, {}px)",
            self.glow.pos.x - CURSOR_GLOW_OFFSET,
            self.glow.pos.y - CURSOR_GLOW_OFFSET
        );
        if self.is_hovering() {
            format!("{} scale({})", base, CURSOR_HOVER_SCALE)
        } else {
            base
        }
    }

    pub fn dot_transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.dot.pos.x - CURSOR_DOT_OFFSET,
            self.dot.pos.y - CURSOR_DOT_OFFSET
        )
    }
}
