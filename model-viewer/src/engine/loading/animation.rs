use bevy::animation::graph::AnimationNodeIndex;
use bevy::prelude::*;

use crate::engine::core::viewer_state::AnimationDriver;

/// Build one graph holding every clip, or `None` for a static asset.
pub fn animation_driver(
    clips: Vec<Handle<AnimationClip>>,
    graphs: &mut Assets<AnimationGraph>,
) -> Option<AnimationDriver> {
    if clips.is_empty() {
        return None;
    }

    let (graph, nodes) = AnimationGraph::from_clips(clips);
    Some(AnimationDriver {
        graph: graphs.add(graph),
        nodes,
    })
}

/// Play every node at once on a repeat. No blending or weighting is applied.
pub fn start_all_clips(player: &mut AnimationPlayer, nodes: &[AnimationNodeIndex]) {
    for &node in nodes {
        player.play(node).repeat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::animation::RepeatAnimation;

    fn two_clip_driver() -> (AnimationDriver, Assets<AnimationGraph>) {
        let mut clips = Assets::<AnimationClip>::default();
        let mut graphs = Assets::<AnimationGraph>::default();
        let handles = vec![
            clips.add(AnimationClip::default()),
            clips.add(AnimationClip::default()),
        ];
        let driver = animation_driver(handles, &mut graphs).expect("two clips give a driver");
        (driver, graphs)
    }

    #[test]
    fn static_asset_has_no_driver() {
        let mut graphs = Assets::<AnimationGraph>::default();
        assert!(animation_driver(Vec::new(), &mut graphs).is_none());
    }

    #[test]
    fn driver_has_a_node_per_clip() {
        let (driver, graphs) = two_clip_driver();
        assert_eq!(driver.nodes.len(), 2);
        assert!(graphs.get(&driver.graph).is_some());
    }

    #[test]
    fn both_clips_play_immediately_and_loop() {
        let (driver, _graphs) = two_clip_driver();
        let mut player = AnimationPlayer::default();

        start_all_clips(&mut player, &driver.nodes);

        assert_eq!(player.playing_animations().count(), 2);
        for node in &driver.nodes {
            assert!(player.is_playing_animation(*node));
            let active = player.animation(*node).expect("clip is active");
            assert_eq!(active.repeat_mode(), RepeatAnimation::Forever);
            assert!(!active.is_paused());
        }
    }
}
