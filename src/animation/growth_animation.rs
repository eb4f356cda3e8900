//! Tree growth animation session
//!
//! Holds everything one animated canvas needs: the grown tree, the current
//! projection, the clock and the greeting flag. The per-frame work is the pure
//! `advance` step, so it can be driven by synthetic timestamps in tests.

use super::easing::ease_out_cubic;
use crate::data::TreeConfig;
use crate::growth::GrownTree;
use crate::layout::{prepare_branches, GreetingPlacement, Layout, PreparedBranch, Viewport};
use crate::render::{branch_color, leaf_color, leaf_radius, DrawCommand};

/// Where a branch is in its own growth at a given clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchPhase {
    Pending,
    Growing,
    Complete,
}

impl BranchPhase {
    pub fn from_progress(progress: f64) -> Self {
        if progress <= 0.0 {
            BranchPhase::Pending
        } else if progress < 1.0 {
            BranchPhase::Growing
        } else {
            BranchPhase::Complete
        }
    }
}

/// Phase of `branch` at `elapsed` on the animation clock
pub fn phase_for(branch: &PreparedBranch, elapsed: f64) -> BranchPhase {
    BranchPhase::from_progress(progress_for(branch, elapsed))
}

/// Eased growth progress in `[0, 1]`
pub fn progress_for(branch: &PreparedBranch, elapsed: f64) -> f64 {
    if branch.duration <= 0.0 {
        return if elapsed > branch.start_time { 1.0 } else { 0.0 };
    }
    let relative = (elapsed - branch.start_time) / branch.duration;
    if relative >= 1.0 {
        1.0
    } else if relative <= 0.0 {
        0.0
    } else {
        ease_out_cubic(relative)
    }
}

/// Output of one animation step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// Every branch is at full length
    pub finished: bool,
    /// Set on the one frame per run that should reveal the greeting
    pub reveal_greeting: bool,
}

/// Animation state for one tree on one surface
#[derive(Debug, Clone)]
pub struct AnimationSession {
    config: TreeConfig,
    tree: GrownTree,
    viewport: Viewport,
    layout: Layout,
    prepared: Vec<PreparedBranch>,
    total_duration: f64,
    /// Timestamp of the first frame of the current run
    clock_origin: Option<f64>,
    greeting_shown: bool,
    finished: bool,
}

impl AnimationSession {
    pub fn new(tree: GrownTree, config: TreeConfig, viewport: Viewport) -> Self {
        let layout = Layout::compute(&viewport, &tree.bounds);
        let prepared = prepare_branches(&tree.branches, &layout, &config);
        let total_duration = tree.total_duration();

        Self {
            config,
            tree,
            viewport,
            layout,
            prepared,
            total_duration,
            clock_origin: None,
            greeting_shown: false,
            finished: false,
        }
    }

    /// Reproject for a new viewport and start the run over
    pub fn viewport_changed(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            log::warn!(
                "viewport is empty ({}x{}), drawing nothing until the next resize",
                viewport.width,
                viewport.height
            );
        }

        self.viewport = viewport;
        self.layout = Layout::compute(&viewport, &self.tree.bounds);
        self.prepared = prepare_branches(&self.tree.branches, &self.layout, &self.config);
        log::debug!(
            "layout {}x{} scale {:.2} padding {:.2}",
            self.layout.width,
            self.layout.height,
            self.layout.scale,
            self.layout.padding
        );

        self.restart();
    }

    /// Forget the clock and hide the greeting
    pub fn restart(&mut self) {
        self.clock_origin = None;
        self.greeting_shown = false;
        self.finished = false;
    }

    /// Step using a host timestamp. The first timestamp of a run starts the clock.
    pub fn frame(&mut self, timestamp: f64) -> Frame {
        let origin = *self.clock_origin.get_or_insert(timestamp);
        self.advance(timestamp - origin)
    }

    /// Produce the frame for `elapsed` time since the run began
    pub fn advance(&mut self, elapsed: f64) -> Frame {
        let max_depth = self.config.max_depth;
        let mut commands = Vec::with_capacity(self.prepared.len() + 1);
        commands.push(DrawCommand::Clear);

        let mut finished = true;
        for branch in &self.prepared {
            let progress = progress_for(branch, elapsed);
            let phase = BranchPhase::from_progress(progress);
            if phase == BranchPhase::Pending {
                finished = false;
                continue;
            }

            commands.push(DrawCommand::StrokeLine {
                from: branch.start,
                to: branch.tip_at(progress),
                width: branch.thickness,
                color: branch_color(branch.depth),
            });

            match phase {
                BranchPhase::Growing => finished = false,
                BranchPhase::Complete if branch.depth == max_depth => {
                    commands.push(DrawCommand::FillCircle {
                        center: branch.end,
                        radius: leaf_radius(branch.thickness),
                        color: leaf_color(branch.depth),
                    });
                }
                _ => {}
            }
        }

        let reveal_greeting = finished && !self.greeting_shown;
        if reveal_greeting {
            self.greeting_shown = true;
            log::info!("tree fully grown after {:.0}ms", elapsed);
        }
        self.finished = finished;

        Frame {
            commands,
            finished,
            reveal_greeting,
        }
    }

    /// Label placement for the current layout
    pub fn greeting_placement(&self, label_height: f64) -> GreetingPlacement {
        GreetingPlacement::compute(&self.layout, &self.tree.bounds, label_height)
    }

    pub fn progress_of(&self, index: usize, elapsed: f64) -> Option<f64> {
        self.prepared
            .get(index)
            .map(|branch| progress_for(branch, elapsed))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn prepared(&self) -> &[PreparedBranch] {
        &self.prepared
    }

    pub fn tree(&self) -> &GrownTree {
        &self.tree
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn greeting_shown(&self) -> bool {
        self.greeting_shown
    }

    pub fn clock_started(&self) -> bool {
        self.clock_origin.is_some()
    }
}
