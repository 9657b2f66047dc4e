//! Console output: the `RenderSink` contract and its terminal renderer.

pub mod render;
pub mod renderer;
