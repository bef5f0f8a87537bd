//! Typed animation requests handed to a [`Compositor`](crate::renderer::Compositor).
//!
//! The widget never interpolates anything itself. It describes *what* should
//! animate (a property, a from value, a to value) and *how long*, and the
//! compositor runs it on its own timeline.

/// Layer property an animation track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Uniform scale of the layer transform (1.0 = identity)
    Scale,
    /// Layer opacity
    Opacity,
}

impl AnimatedProperty {
    /// Compositor key path for this property.
    pub fn key_path(&self) -> &'static str {
        match self {
            AnimatedProperty::Scale => "transform.scale",
            AnimatedProperty::Opacity => "opacity",
        }
    }
}

/// A single from/to track for one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAnimation {
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
}

impl PropertyAnimation {
    pub fn new(property: AnimatedProperty, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    pub fn scale(from: f32, to: f32) -> Self {
        Self::new(AnimatedProperty::Scale, from, to)
    }

    pub fn opacity(from: f32, to: f32) -> Self {
        Self::new(AnimatedProperty::Opacity, from, to)
    }
}

/// How long a request runs. Compositors play every request on a linear curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
}

impl Transition {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }
}

impl Default for Transition {
    /// 300 ms
    fn default() -> Self {
        Self::new(300.0)
    }
}

/// One or more property tracks that run concurrently under a single
/// duration.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationGroup {
    pub tracks: Vec<PropertyAnimation>,
    pub transition: Transition,
}

impl AnimationGroup {
    pub fn new(tracks: Vec<PropertyAnimation>, transition: Transition) -> Self {
        Self { tracks, transition }
    }

    /// A group holding a single track.
    pub fn single(track: PropertyAnimation, transition: Transition) -> Self {
        Self::new(vec![track], transition)
    }

    /// Find the track driving `property`, if any.
    pub fn track(&self, property: AnimatedProperty) -> Option<&PropertyAnimation> {
        self.tracks.iter().find(|t| t.property == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_paths() {
        assert_eq!(AnimatedProperty::Scale.key_path(), "transform.scale");
        assert_eq!(AnimatedProperty::Opacity.key_path(), "opacity");
    }

    #[test]
    fn test_transition_duration() {
        assert_eq!(Transition::default().duration_ms, 300.0);
        assert_eq!(Transition::default().duration(150.0).duration_ms, 150.0);
        assert_eq!(Transition::new(-5.0).duration_ms, 0.0);
    }

    #[test]
    fn test_group_keeps_track_order() {
        let group = AnimationGroup::new(
            vec![
                PropertyAnimation::scale(1.0, 0.0),
                PropertyAnimation::opacity(0.35, 0.0),
            ],
            Transition::default(),
        );
        assert_eq!(group.tracks[0].property, AnimatedProperty::Scale);
        assert_eq!(group.tracks[1].property, AnimatedProperty::Opacity);
        assert_eq!(group.transition.duration_ms, 300.0);
    }

    #[test]
    fn test_track_lookup() {
        let group = AnimationGroup::single(PropertyAnimation::scale(0.0, 1.0), Transition::default());
        assert!(group.track(AnimatedProperty::Scale).is_some());
        assert!(group.track(AnimatedProperty::Opacity).is_none());
    }
}
