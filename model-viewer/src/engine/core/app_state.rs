use bevy::prelude::*;

/// Whether the frame loop, input handlers and resize handling are live.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewerPhase {
    #[default]
    Running,
    Stopped,
}

impl ViewerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerPhase::Running => "running",
            ViewerPhase::Stopped => "stopped",
        }
    }
}

/// Request from the page (or tests) to start or stop the viewer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Start,
    Stop,
}

pub fn apply_viewer_commands(
    mut commands: EventReader<ViewerCommand>,
    phase: Res<State<ViewerPhase>>,
    mut next_phase: ResMut<NextState<ViewerPhase>>,
) {
    // Last command in a frame wins.
    let Some(command) = commands.read().last().copied() else {
        return;
    };

    let requested = match command {
        ViewerCommand::Start => ViewerPhase::Running,
        ViewerCommand::Stop => ViewerPhase::Stopped,
    };

    if *phase.get() != requested {
        info!("→ Transitioning viewer to {:?}", requested);
        next_phase.set(requested);
    }
}
