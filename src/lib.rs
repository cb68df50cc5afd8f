//! wavyte-motion is the frame-indexed animation engine behind Wavyte's programmatic videos.
//!
//! Given an absolute frame and a declarative [`AnimationConfig`], it produces a sparse
//! [`PropertySet`] (opacity, translation, scale, rotation, clip, filters) that a rendering layer
//! applies to an element. Evaluation is pure: the same frame, config and frame rate always yield
//! the same properties, so frames can be sampled in any order or in parallel.
//!
//! - Build an [`Evaluator`] for the project's [`Fps`]
//! - Call [`Evaluator::evaluate`] for a single phase or [`Evaluator::evaluate_dual`] for an
//!   entry followed by an exit
//! - Use [`StaggerPlan`] to offset a list of items and [`sample_range`] for whole frame ranges
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod eval;
pub(crate) mod style;

pub use crate::foundation::core::{Affine, Fps, FrameIndex, FrameRange, Size, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::config::{AnimationConfig, CustomParams, DEFAULT_DURATION_FRAMES, Easing};
pub use crate::animation::ease::Ease;
pub use crate::animation::kind::{AnimationKind, KindFamily};
pub use crate::animation::progress::{MIN_DURATION_FRAMES, interpolate, linear_ratio, progress};
pub use crate::animation::spring::{SpringParams, spring_progress};
pub use crate::animation::stagger::{StaggerPlan, delay_for};
pub use crate::animation::table::apply;

pub use crate::eval::evaluator::Evaluator;
pub use crate::eval::fingerprint::{
    PropertyFingerprint, fingerprint_properties, fingerprint_sequence,
};
pub use crate::eval::motion::{DualPhaseRequest, Motion};
pub use crate::eval::sampling::{
    SampleStats, SampleThreading, sample_range, sample_range_with_stats,
};

pub use crate::style::length::Length;
pub use crate::style::properties::{ClipInset, PropertySet, Rotate3d};
