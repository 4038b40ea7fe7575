pub mod backdrop;
pub mod bars;
pub mod horizontal_slider;
pub mod vinyl;

pub use backdrop::{Backdrop, Orb};
pub use bars::Bars;
pub use horizontal_slider::{HorizontalSlider, SliderColors};
pub use vinyl::Vinyl;
