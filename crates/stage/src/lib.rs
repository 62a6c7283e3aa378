//! The interactive part of the lighters scene.
//!
//! - [`HingedObject`] and [`HingeState`]: one lighter cap and whether it is open
//! - [`ToggleController`]: turns a picked name into a hinge rotation plus audio commands
//! - [`Stage`]: owns the scene, camera, lights, audio and toggles, and produces
//!   one [`Frame`] per tick

pub mod hinge;
pub mod stage;
pub mod toggle;

pub use hinge::{HingeState, HingedObject};
pub use stage::{DrawItem, Frame, Lighter, Stage};
pub use toggle::{ToggleController, ToggleOutcome};
