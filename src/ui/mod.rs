/// UI building blocks
///
/// - Canvas-sized image handles for the two preview slots (display.rs)
/// - The RGB histogram panel for the processed image (histogram.rs)

pub mod display;
pub mod histogram;
