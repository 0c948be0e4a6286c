//! Software rendering: 2-D rasterization and the 3-D raymarcher.

pub mod march;
pub mod raster;
