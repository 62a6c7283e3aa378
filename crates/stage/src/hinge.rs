//! Hinged lighter caps.

use lighter_audio::StreamId;
use lighter_scene::RotationAxis;

/// Whether a cap is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HingeState {
    #[default]
    Closed,
    Open,
}

impl HingeState {
    /// The state a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            HingeState::Closed => HingeState::Open,
            HingeState::Open => HingeState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == HingeState::Open
    }

    /// Sign of the rotation that leaves this state.
    pub fn swing_sign(self) -> f64 {
        match self {
            HingeState::Closed => 1.0,
            HingeState::Open => -1.0,
        }
    }
}

/// A scene node that swings about a fixed axis between two states.
#[derive(Clone, Debug)]
pub struct HingedObject {
    hit_name: String,
    target: String,
    axis: RotationAxis,
    stream: StreamId,
    state: HingeState,
}

impl HingedObject {
    /// Create a closed hinge.
    ///
    /// * `hit_name` - name picking reports for any part of the object
    /// * `target` - name of the node that rotates
    pub fn new(
        hit_name: impl Into<String>,
        target: impl Into<String>,
        axis: RotationAxis,
        stream: StreamId,
    ) -> Self {
        Self {
            hit_name: hit_name.into(),
            target: target.into(),
            axis,
            stream,
            state: HingeState::Closed,
        }
    }

    pub fn hit_name(&self) -> &str {
        &self.hit_name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn axis(&self) -> &RotationAxis {
        &self.axis
    }

    pub fn stream(&self) -> StreamId {
        self.stream
    }

    pub fn state(&self) -> HingeState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub(crate) fn set_state(&mut self, state: HingeState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_toggled_alternates() {
        assert_eq!(HingeState::Closed.toggled(), HingeState::Open);
        assert_eq!(HingeState::Open.toggled(), HingeState::Closed);
        assert_eq!(HingeState::default(), HingeState::Closed);
    }

    #[test]
    fn test_swing_sign() {
        assert_eq!(HingeState::Closed.swing_sign(), 1.0);
        assert_eq!(HingeState::Open.swing_sign(), -1.0);
    }

    #[test]
    fn test_new_hinge_is_closed() {
        let axis = RotationAxis::new(DVec3::new(-93.0, 53.0, 0.0), DVec3::Z).unwrap();
        let hinge = HingedObject::new("lighter1Item", "lighter1Head", axis, StreamId(0));
        assert!(!hinge.is_open());
        assert_eq!(hinge.hit_name(), "lighter1Item");
        assert_eq!(hinge.target(), "lighter1Head");
        assert_eq!(hinge.stream(), StreamId(0));
    }
}
