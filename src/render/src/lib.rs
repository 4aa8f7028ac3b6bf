pub mod curve_renderer;
pub mod debug_renderer;
pub mod error;
pub mod raster;
pub mod surface;

pub use curve_renderer::CurveRenderer;
pub use debug_renderer::DebugRenderer;
pub use error::RenderError;
pub use raster::RasterSurface;
pub use surface::{DrawCommand, Recorder, Surface};
