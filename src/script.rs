//! Scripted input for headless runs
//!
//! Stands in for device callbacks: each cue fires once, when the simulated
//! clock passes its time, and writes into the [`InputState`] latch.

use artemis_game::InputState;
use glam::Vec2;
use tracing::debug;

/// One input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Set the move axis
    Move(Vec2),
    /// Add a look delta
    Look(Vec2),
    /// Press or release sprint
    Sprint(bool),
    /// Press jump
    Jump,
}

/// An action scheduled at a simulated time
#[derive(Debug, Clone, Copy)]
pub struct Cue {
    pub at: f64,
    pub action: Action,
}

/// Time-ordered list of cues
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    cues: Vec<Cue>,
    next: usize,
}

impl InputScript {
    /// Build a script; cues are sorted by time
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { cues, next: 0 }
    }

    /// Walk, sprint, turn, jump, then let go
    pub fn demo() -> Self {
        let cue = |at, action| Cue { at, action };
        Self::new(vec![
            cue(0.5, Action::Move(Vec2::new(0.0, 1.0))),
            cue(1.5, Action::Sprint(true)),
            cue(2.5, Action::Look(Vec2::new(450.0, -100.0))),
            cue(3.0, Action::Jump),
            cue(4.0, Action::Sprint(false)),
            cue(4.5, Action::Move(Vec2::ZERO)),
            cue(5.0, Action::Look(Vec2::new(0.0, 100.0))),
        ])
    }

    /// Fire every cue due at `time`; returns how many fired
    pub fn advance(&mut self, time: f64, input: &mut InputState) -> usize {
        let start = self.next;
        while let Some(cue) = self.cues.get(self.next) {
            if cue.at > time {
                break;
            }
            debug!(at = cue.at, action = ?cue.action, "Input cue");
            match cue.action {
                Action::Move(axis) => input.on_move(axis),
                Action::Look(delta) => input.on_look(delta),
                Action::Sprint(held) => input.on_sprint(held),
                Action::Jump => input.on_jump(true),
            }
            self.next += 1;
        }
        self.next - start
    }

    /// Whether every cue has fired
    pub fn finished(&self) -> bool {
        self.next >= self.cues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_fire_once_in_order() {
        let mut script = InputScript::new(vec![
            Cue {
                at: 1.0,
                action: Action::Jump,
            },
            Cue {
                at: 0.5,
                action: Action::Move(Vec2::new(0.0, 1.0)),
            },
        ]);
        let mut input = InputState::new();
        input.capture_cursor();

        assert_eq!(script.advance(0.4, &mut input), 0);
        assert_eq!(script.advance(0.6, &mut input), 1);
        assert_eq!(input.take_frame().move_axis, Vec2::new(0.0, 1.0));

        assert_eq!(script.advance(2.0, &mut input), 1);
        assert!(input.take_frame().jump_requested);
        assert_eq!(script.advance(3.0, &mut input), 0);
        assert!(script.finished());
    }
}
