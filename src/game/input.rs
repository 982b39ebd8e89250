//! Control Commands
//!
//! The uniform channel between input sources (keyboard, touch, bots) and
//! the simulation. Producers queue discrete commands; the frame drains
//! them in arrival order. Commands are data, so a recorded run replays by
//! feeding the same sequence back in.

use serde::{Deserialize, Serialize};

/// A discrete control action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Steer one lane left
    MoveLeft,
    /// Steer one lane right
    MoveRight,
    /// Jump, or kick mid-air when the upgrade is owned
    Jump,
}

/// FIFO of commands awaiting the next frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommandQueue {
    pending: Vec<Command>,
}

impl CommandQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for the next frame.
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Take everything queued so far, in arrival order.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    /// Number of commands waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = CommandQueue::new();
        queue.push(Command::MoveLeft);
        queue.push(Command::Jump);
        queue.push(Command::MoveRight);
        assert_eq!(queue.len(), 3);

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![Command::MoveLeft, Command::Jump, Command::MoveRight]
        );
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Jump);
        let _ = queue.drain();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
