//! Platform layer for the lighters scene.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit
//! - Input handling (keyboard, mouse) with click and drag detection
//! - Mapping pointer positions to normalized device coordinates

mod input;
mod window;

pub use input::{InputState, KeyCode, MouseButton, pointer_to_ndc};
pub use window::Window;

// Re-export winit types that users might need
pub use winit::event::{Event, WindowEvent};
pub use winit::event_loop::EventLoop;
