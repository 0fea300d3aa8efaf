//! Task Scheduler
//!
//! Timed effects that run alongside the per-tick state machine. A task
//! contributes displacement every tick until its duration elapses and then
//! reports a completion the controller applies to the locomotion state.
//!
//! Tasks advance on simulation time passed in by the caller, never wall-clock
//! time, so scripted runs are deterministic.

use glam::Vec3;
use tracing::debug;

/// Handle returned when a task is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// What a task does while it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskKind {
    /// Carry the character by `offset` over the task duration (ease-out).
    WindBoost { offset: Vec3 },
}

/// Follow-up action reported when a task finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCompletion {
    /// A wind boost reached its end point
    WindBoost(TaskId),
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TaskId,
    kind: TaskKind,
    duration: f32,
    elapsed: f32,
}

impl ScheduledTask {
    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased progress in [0, 1].
    fn eased(&self) -> f32 {
        if self.is_done() {
            1.0
        } else {
            ease_out_quad(self.elapsed / self.duration)
        }
    }
}

/// Result of advancing the scheduler by one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskTick {
    /// Combined displacement from all running tasks
    pub displacement: Vec3,
    /// Tasks that finished this tick, in scheduling order
    pub completed: Vec<TaskCompletion>,
}

/// Quadratic ease-out: fast start, slow arrival.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Owns running timed tasks.
///
/// ## Usage
/// ```rust,ignore
/// let mut scheduler = TaskScheduler::new();
/// scheduler.schedule(TaskKind::WindBoost { offset }, 1.0);
///
/// // Each tick, after the state machine
/// let tick = scheduler.advance(dt);
/// displacement += tick.displacement;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a task running for `duration` seconds.
    ///
    /// A non-positive duration completes on the next advance.
    pub fn schedule(&mut self, kind: TaskKind, duration: f32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        debug!(?id, ?kind, duration, "task scheduled");
        self.tasks.push(ScheduledTask {
            id,
            kind,
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
        id
    }

    /// Advance every task by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> TaskTick {
        let mut tick = TaskTick::default();

        for task in &mut self.tasks {
            // A zero-length task has not started until its first advance
            let before = if task.elapsed == 0.0 { 0.0 } else { task.eased() };
            task.elapsed += dt;
            let after = task.eased();

            match task.kind {
                TaskKind::WindBoost { offset } => {
                    tick.displacement += offset * (after - before);
                }
            }

            if task.is_done() {
                debug!(id = ?task.id, "task complete");
                tick.completed.push(match task.kind {
                    TaskKind::WindBoost { .. } => TaskCompletion::WindBoost(task.id),
                });
            }
        }

        self.tasks.retain(|task| !task.is_done());
        tick
    }

    /// Number of tasks still running.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Check whether a running task carries the character vertically.
    pub fn holds_vertical(&self) -> bool {
        self.tasks
            .iter()
            .any(|task| matches!(task.kind, TaskKind::WindBoost { .. }))
    }
}
