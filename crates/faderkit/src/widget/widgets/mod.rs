//! Concrete widget implementations.

mod button;
mod dial;
mod label;
mod list;
mod slider;

pub use button::Button;
pub use dial::Dial;
pub use label::Label;
pub use list::List;
pub use slider::{Orientation, Slider};
