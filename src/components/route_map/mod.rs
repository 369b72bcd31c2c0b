mod component;
mod projection;
mod render;
pub mod scene;

pub use component::RouteMapCanvas;
pub use scene::Scene;
