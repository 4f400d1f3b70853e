/// Backend contract, frame type and settings.
pub mod backend;
/// CPU raster backend.
pub mod cpu;
