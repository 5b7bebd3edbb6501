//! Tasks deferred until the next frame has been painted
//!
//! The main loop drains the queue right after `Terminal::draw` returns, so a
//! task scheduled during an update runs once the resulting state is on screen.
//! Tasks are fire-and-forget: no cancellation, and a task whose target is gone
//! is simply a no-op when applied.

use std::collections::VecDeque;

/// A deferred task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTask {
    /// Give keyboard focus back to the text input
    FocusInput,
}

#[derive(Debug, Default)]
pub struct FrameQueue {
    tasks: VecDeque<FrameTask>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Schedule a task for after the next paint
    pub fn schedule(&mut self, task: FrameTask) {
        self.tasks.push_back(task);
    }

    /// Take every pending task in scheduling order
    pub fn drain(&mut self) -> Vec<FrameTask> {
        self.tasks.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}
