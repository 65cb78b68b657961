//! CPU drawing: the owned color buffer, borrowed frame buffer views and the
//! polygon rasterizer.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    validate_polygon, PolygonRasterizer, RasterError, ScanlineRasterizer, COORDINATE_LIMIT,
};
pub use renderer::Renderer;
