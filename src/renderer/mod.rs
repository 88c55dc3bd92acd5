//! WebGPU rendering module
//!
//! Flat-colored triangles built on the CPU from a [`crate::sim::Snapshot`].

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use vertex::Vertex;
