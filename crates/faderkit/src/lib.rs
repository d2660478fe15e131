//! faderkit - a lightweight widget toolkit for audio control surfaces.
//!
//! faderkit turns raw pointer input into changes of a widget's scalar value
//! (knobs, faders, buttons, lists) and tells the application about them
//! through callbacks. Drawing goes through the [`Surface`](widget::Surface)
//! trait, so any graphics backend can host the widgets.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! use faderkit::Ui;
//! use faderkit::widget::{DrawList, Event, Rect, Slider, Widget};
//!
//! let mut ui = Ui::new();
//! let volume = ui.add(Slider::vertical(Rect::new(10, 10, 20, 100), "Volume"));
//!
//! let last = Arc::new(AtomicU32::new(0));
//! let last_clone = last.clone();
//! if let Some(slider) = ui.widget_mut(volume) {
//!     slider.widget_base_mut().set_callback(move |change| {
//!         last_clone.store(change.value.to_bits(), Ordering::SeqCst);
//!     });
//! }
//!
//! ui.handle(&Event::press(15, 60));
//! assert_eq!(f32::from_bits(last.load(Ordering::SeqCst)), 0.5);
//!
//! let mut surface = DrawList::new();
//! ui.draw(&mut surface);
//! assert!(!surface.is_empty());
//! ```

pub use faderkit_core::*;

pub mod config;
pub mod file;
pub mod theme;
mod ui;
pub mod widget;

pub use config::{ConfigError, ConfigResult, ThemeChoice, ToolkitConfig};
pub use ui::Ui;

/// Audio-sample loading.
#[cfg(feature = "multimedia")]
pub mod multimedia {
    pub use faderkit_multimedia::*;
}
