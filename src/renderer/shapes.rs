//! Shape generation for 2D primitives
//!
//! All coordinates are canvas pixels (origin top-left, y down); the pipeline
//! maps them to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, Rect, Snapshot};

/// Height of the ground strip drawn under the floor line
const GROUND_STRIP: f32 = 20.0;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// The runner: a body circle with a smaller head circle on top
pub fn dino(bounds: &Rect) -> Vec<Vertex> {
    let cx = bounds.left() + bounds.size.x / 2.0;
    let body = Vec2::new(cx, bounds.top() + bounds.size.y * 0.75);
    let head = Vec2::new(cx, bounds.top() + bounds.size.y * 0.25);

    let mut vertices = circle(body, bounds.size.x / 2.0, colors::DINO, 24);
    vertices.extend(circle(head, bounds.size.x * 0.3, colors::DINO, 16));
    vertices
}

/// Build every vertex for one frame
pub fn scene(snapshot: &Snapshot, canvas: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6 * (snapshot.obstacles.len() + 2) + 120);

    vertices.extend(rect(
        &Rect::new(0.0, canvas.y - GROUND_STRIP, canvas.x, GROUND_STRIP),
        colors::GROUND,
    ));

    for obstacle in &snapshot.obstacles {
        vertices.extend(rect(obstacle, colors::CACTUS));
    }

    vertices.extend(dino(&snapshot.player));

    if snapshot.phase == GamePhase::Over {
        vertices.extend(rect(
            &Rect::new(0.0, 0.0, canvas.x, canvas.y),
            colors::GAME_OVER_SHADE,
        ));
    }

    vertices
}
