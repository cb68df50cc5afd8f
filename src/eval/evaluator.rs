use crate::animation::config::{AnimationConfig, Easing};
use crate::animation::ease::Ease;
use crate::animation::progress::progress;
use crate::animation::spring::{SpringParams, spring_progress};
use crate::animation::stagger::StaggerPlan;
use crate::animation::table::apply_seeded;
use crate::eval::dual::compose_dual;
use crate::eval::motion::{DualPhaseRequest, Motion};
use crate::foundation::core::{Fps, FrameIndex};
use crate::style::properties::PropertySet;

/// Frame-rate-bound entry point for evaluating animation configs.
///
/// Holds no state besides the frame rate; every method is a pure function of its arguments, so a
/// single `Evaluator` can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    fps: Fps,
}

impl Evaluator {
    /// Evaluator for a project running at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self { fps }
    }

    /// Frame rate used for spring timing.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Progress of `config` at `frame`, from the spring evaluator for spring-driven kinds and
    /// from the eased linear ratio otherwise.
    pub fn progress(&self, frame: FrameIndex, config: &AnimationConfig) -> f64 {
        self.progress_from(frame, config, config.start_frame())
    }

    /// Visual properties of a single-phase animation at `frame`.
    ///
    /// `none` and unknown kinds yield an empty set.
    pub fn evaluate(&self, frame: FrameIndex, config: &AnimationConfig) -> PropertySet {
        self.evaluate_from(frame, config, config.start_frame())
    }

    /// Visual properties of an entry animation followed by an exit animation.
    ///
    /// The exit is handed off at `exit_frame + exit.delay`. An exit of kind `none`, or an
    /// `exit_frame` of 0, disables the exit phase.
    pub fn evaluate_dual(
        &self,
        frame: FrameIndex,
        entry: &AnimationConfig,
        exit: &AnimationConfig,
        exit_frame: FrameIndex,
    ) -> PropertySet {
        compose_dual(self, frame, entry, exit, exit_frame)
    }

    /// [`Evaluator::evaluate_dual`] over a bundled request.
    pub fn evaluate_request(&self, frame: FrameIndex, request: &DualPhaseRequest) -> PropertySet {
        self.evaluate_dual(frame, &request.entry, &request.exit, request.exit_frame)
    }

    /// Evaluate either call shape.
    pub fn evaluate_motion(&self, frame: FrameIndex, motion: &Motion) -> PropertySet {
        match motion {
            Motion::Single(cfg) => self.evaluate(frame, cfg),
            Motion::Dual(req) => self.evaluate_request(frame, req),
        }
    }

    /// Evaluate `count` items sharing `base`, delayed by `plan`.
    pub fn evaluate_staggered(
        &self,
        frame: FrameIndex,
        base: &AnimationConfig,
        plan: StaggerPlan,
        count: usize,
    ) -> Vec<PropertySet> {
        (0..count)
            .map(|i| self.evaluate(frame, &plan.config_for(i, base)))
            .collect()
    }

    /// Evaluate `config` with its window anchored at `start` instead of its own delay.
    pub(crate) fn evaluate_from(
        &self,
        frame: FrameIndex,
        config: &AnimationConfig,
        start: FrameIndex,
    ) -> PropertySet {
        if config.kind.is_inert() {
            return PropertySet::EMPTY;
        }
        let p = self.progress_from(frame, config, start);
        let seed = frame_seed(config.custom.seed, frame);
        apply_seeded(config.kind, p, &config.custom, seed)
    }

    pub(crate) fn progress_from(
        &self,
        frame: FrameIndex,
        config: &AnimationConfig,
        start: FrameIndex,
    ) -> f64 {
        if config.kind.is_spring_driven() {
            let params = match config.easing {
                Easing::Spring(params) => params,
                Easing::Curve(_) => SpringParams::DEFAULT,
            };
            return spring_progress(frame, start, params, self.fps);
        }

        let ease = match config.easing {
            Easing::Curve(ease) => ease,
            Easing::Spring(_) => {
                tracing::debug!(
                    kind = config.kind.name(),
                    "spring easing on a curve-driven kind; using linear"
                );
                Ease::Linear
            }
        };
        progress(frame, start, config.duration_frames(), ease)
    }
}

// Same frame and salt always give the same jitter.
fn frame_seed(salt: Option<u64>, frame: FrameIndex) -> u64 {
    salt.unwrap_or(0) ^ frame.0.wrapping_mul(0xD6E8_FEB8_6659_FD93)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
