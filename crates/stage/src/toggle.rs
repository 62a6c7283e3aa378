//! Click-driven hinge toggling.
//!
//! Opening a hinge rotates its target by `+open_angle`, stops every other
//! hinge's stream and starts its own. Closing rotates by `-open_angle` and
//! stops only its own stream. Other hinges keep their visual state, so
//! several caps can be open while only the last one opened is heard.

use lighter_audio::AudioSink;
use lighter_scene::PoseTarget;

use crate::hinge::{HingeState, HingedObject};

/// Result of a hit that toggled a hinge.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleOutcome {
    /// Index of the hinge in [`ToggleController::hinges`]
    pub hinge: usize,
    /// State after the toggle
    pub state: HingeState,
}

/// Owns the hinges and dispatches hits to them.
#[derive(Clone, Debug)]
pub struct ToggleController {
    hinges: Vec<HingedObject>,
    open_angle: f64,
}

impl ToggleController {
    /// Create a controller whose hinges swing through `open_angle` radians.
    pub fn new(open_angle: f64) -> Self {
        Self {
            hinges: Vec::new(),
            open_angle,
        }
    }

    /// Add a hinge, returning its index.
    pub fn add(&mut self, hinge: HingedObject) -> usize {
        self.hinges.push(hinge);
        self.hinges.len() - 1
    }

    pub fn open_angle(&self) -> f64 {
        self.open_angle
    }

    pub fn hinges(&self) -> &[HingedObject] {
        &self.hinges
    }

    /// Hinge picked under `hit_name`.
    pub fn hinge(&self, hit_name: &str) -> Option<&HingedObject> {
        self.hinges.iter().find(|h| h.hit_name() == hit_name)
    }

    pub fn state(&self, hit_name: &str) -> Option<HingeState> {
        self.hinge(hit_name).map(HingedObject::state)
    }

    /// `false` for unknown names.
    pub fn is_open(&self, hit_name: &str) -> bool {
        self.hinge(hit_name).is_some_and(HingedObject::is_open)
    }

    /// Handle a pick that resolved to `hit_name`.
    ///
    /// Unknown names do nothing. If the hinge's target node is missing from
    /// `scene`, nothing changes either. Otherwise the pose update and state
    /// change complete before any audio command is issued.
    pub fn on_hit(
        &mut self,
        hit_name: &str,
        scene: &mut impl PoseTarget,
        audio: &mut impl AudioSink,
    ) -> Option<ToggleOutcome> {
        let Some(index) = self.hinges.iter().position(|h| h.hit_name() == hit_name) else {
            tracing::trace!("Hit on '{}' has no hinge", hit_name);
            return None;
        };

        let hinge = &mut self.hinges[index];
        let current = hinge.state();
        let rotation = hinge.axis().rotation(current.swing_sign() * self.open_angle);
        if !scene.compose_pose(hinge.target(), rotation) {
            tracing::warn!(
                "Hinge '{}' targets missing node '{}'",
                hinge.hit_name(),
                hinge.target()
            );
            return None;
        }

        let next = current.toggled();
        hinge.set_state(next);
        let stream = hinge.stream();
        tracing::info!("Hinge '{}' is now {:?}", hit_name, next);

        match next {
            HingeState::Open => {
                for other in self.hinges.iter().filter(|h| h.stream() != stream) {
                    audio.stop_stream(other.stream());
                }
                audio.start_stream(stream);
            }
            HingeState::Closed => audio.stop_stream(stream),
        }

        Some(ToggleOutcome {
            hinge: index,
            state: next,
        })
    }
}
