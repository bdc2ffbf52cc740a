pub mod blur;
pub mod composite;
pub mod frame;
pub mod raster;

pub use frame::FrameRGBA;
