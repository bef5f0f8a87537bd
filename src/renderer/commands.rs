//! Command list recording of compositor calls.

use std::collections::BTreeMap;

use super::{Compositor, LayerId, LayerProps};
use crate::animation::AnimationGroup;
use crate::widgets::{Point, SelectionMask};

/// A single compositor call, in the order it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    AddLayer {
        id: LayerId,
        props: LayerProps,
    },
    SetPosition {
        id: LayerId,
        position: Point,
    },
    SetOpacity {
        id: LayerId,
        opacity: f32,
    },
    AddAnimation {
        id: LayerId,
        key: String,
        animation: AnimationGroup,
    },
    RemoveLayer {
        id: LayerId,
    },
    SetMask {
        mask: Option<SelectionMask>,
    },
    SetCornerRadius {
        radius: f32,
    },
}

/// A [`Compositor`] that records commands for a host to replay.
///
/// Also keeps the resulting scene state so callers can inspect live layers
/// and the current mask without replaying.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<RenderCommand>,
    layers: BTreeMap<LayerId, LayerProps>,
    mask: Option<SelectionMask>,
    corner_radius: f32,
    next_id: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since creation or the last [`take_commands`](Self::take_commands).
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the scene state intact.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Layers currently attached, in creation order.
    pub fn live_layers(&self) -> impl Iterator<Item = (LayerId, &LayerProps)> {
        self.layers.iter().map(|(id, props)| (*id, props))
    }

    pub fn live_layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, id: LayerId) -> Option<&LayerProps> {
        self.layers.get(&id)
    }

    pub fn mask(&self) -> Option<&SelectionMask> {
        self.mask.as_ref()
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Animation requests recorded so far, with their layer and key.
    pub fn animations(&self) -> impl Iterator<Item = (LayerId, &str, &AnimationGroup)> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::AddAnimation { id, key, animation } => {
                Some((*id, key.as_str(), animation))
            }
            _ => None,
        })
    }
}

impl Compositor for CommandRecorder {
    fn add_layer(&mut self, props: LayerProps) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, props);
        self.commands.push(RenderCommand::AddLayer { id, props });
        id
    }

    fn set_layer_position(&mut self, id: LayerId, position: Point) {
        if let Some(props) = self.layers.get_mut(&id) {
            props.position = position;
        }
        self.commands.push(RenderCommand::SetPosition { id, position });
    }

    fn set_layer_opacity(&mut self, id: LayerId, opacity: f32) {
        if let Some(props) = self.layers.get_mut(&id) {
            props.opacity = opacity;
        }
        self.commands.push(RenderCommand::SetOpacity { id, opacity });
    }

    fn add_animation(&mut self, id: LayerId, key: &str, animation: AnimationGroup) {
        self.commands.push(RenderCommand::AddAnimation {
            id,
            key: key.to_string(),
            animation,
        });
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.remove(&id);
        self.commands.push(RenderCommand::RemoveLayer { id });
    }

    fn set_mask(&mut self, mask: Option<SelectionMask>) {
        self.mask = mask.clone();
        self.commands.push(RenderCommand::SetMask { mask });
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
        self.commands.push(RenderCommand::SetCornerRadius { radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{PropertyAnimation, Transition};
    use crate::widgets::Color;

    fn circle() -> LayerProps {
        LayerProps::circle(10.0, Point::new(5.0, 5.0), Color::BLACK, 0.35)
    }

    #[test]
    fn test_layers_get_distinct_ids() {
        let mut recorder = CommandRecorder::new();
        let a = recorder.add_layer(circle());
        let b = recorder.add_layer(circle());
        assert_ne!(a, b);
        assert_eq!(recorder.live_layer_count(), 2);
    }

    #[test]
    fn test_remove_detaches_layer() {
        let mut recorder = CommandRecorder::new();
        let id = recorder.add_layer(circle());
        recorder.remove_layer(id);
        assert_eq!(recorder.live_layer_count(), 0);
        assert_eq!(
            recorder.commands().last(),
            Some(&RenderCommand::RemoveLayer { id })
        );
    }

    #[test]
    fn test_model_updates_track_live_layer() {
        let mut recorder = CommandRecorder::new();
        let id = recorder.add_layer(circle());
        recorder.set_layer_position(id, Point::new(1.0, 2.0));
        recorder.set_layer_opacity(id, 0.0);

        let props = recorder.layer(id).expect("layer is live");
        assert_eq!(props.position, Point::new(1.0, 2.0));
        assert_eq!(props.opacity, 0.0);
    }

    #[test]
    fn test_take_commands_keeps_scene() {
        let mut recorder = CommandRecorder::new();
        let id = recorder.add_layer(circle());
        recorder.add_animation(
            id,
            "zoom",
            AnimationGroup::single(PropertyAnimation::scale(0.0, 1.0), Transition::default()),
        );
        assert_eq!(recorder.animations().count(), 1);

        let drained = recorder.take_commands();
        assert_eq!(drained.len(), 2);
        assert!(recorder.commands().is_empty());
        assert_eq!(recorder.live_layer_count(), 1);
    }

    #[test]
    fn test_circle_props() {
        let props = circle();
        assert_eq!(props.frame, crate::widgets::Rect::from_size(20.0, 20.0));
        assert_eq!(props.corner_radius, 10.0);
    }
}
