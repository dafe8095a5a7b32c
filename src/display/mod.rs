// Display module - presentation frontend
//
// The emulator core treats presentation as an external consumer: it hands
// over a 256x240 ARGB frame buffer and receives button state. This module
// is that consumer, built on winit and pixels.

mod window;

pub use window::{run_display, DisplayWindow, WindowConfig};
