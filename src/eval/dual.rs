//! Entry + exit composition.
//!
//! Opacity is blended: when both phases populate it, the result is the product of both phases
//! evaluated at the same frame. Before the hand-off the exit only contributes when it starts fully
//! opaque (a fade-out shape); an exit that fades in or flickers from its first frame is gated like
//! the transforms. Every other property is phase-gated at the hand-off frame, except for the
//! closed-form pairs in [`Pairing`], which combine both phases continuously.

use crate::animation::config::AnimationConfig;
use crate::animation::kind::AnimationKind;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::FrameIndex;
use crate::style::length::Length;
use crate::style::properties::PropertySet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// `fadeIn` then `fadeOut`.
    Fade,
    /// Scale-up then scale-down; per-axis product.
    Scale,
    /// `rotateIn` then `rotateOut`; angle sum.
    Rotate,
    /// Horizontal slide in then out; translation sum.
    SlideX,
    /// Vertical slide in then out; translation sum.
    SlideY,
    /// Anything else.
    Gated,
}

pub(crate) fn classify(entry: AnimationKind, exit: AnimationKind) -> Pairing {
    use AnimationKind as K;
    match (entry, exit) {
        (K::FadeIn, K::FadeOut) => Pairing::Fade,
        (K::ZoomIn | K::ScaleIn, K::ZoomOut | K::ScaleOut) => Pairing::Scale,
        (K::RotateIn, K::RotateOut) => Pairing::Rotate,
        (K::SlideInLeft | K::SlideInRight, K::SlideOutLeft | K::SlideOutRight) => Pairing::SlideX,
        (K::SlideInTop | K::SlideInBottom, K::SlideOutTop | K::SlideOutBottom) => Pairing::SlideY,
        _ => Pairing::Gated,
    }
}

/// Hand-off frame: the exit's own delay counts from `exit_frame`.
pub(crate) fn handoff_frame(exit: &AnimationConfig, exit_frame: FrameIndex) -> FrameIndex {
    exit_frame.saturating_add(exit.delay_frames())
}

pub(crate) fn compose_dual(
    ev: &Evaluator,
    frame: FrameIndex,
    entry: &AnimationConfig,
    exit: &AnimationConfig,
    exit_frame: FrameIndex,
) -> PropertySet {
    if exit.kind.is_inert() || exit_frame.0 == 0 {
        return ev.evaluate(frame, entry);
    }

    let handoff = handoff_frame(exit, exit_frame);
    let a = ev.evaluate(frame, entry);
    let b = ev.evaluate_from(frame, exit, handoff);

    let exit_opacity = if frame < handoff && !starts_opaque(ev, exit, handoff) {
        None
    } else {
        b.opacity
    };
    let opacity = product(a.opacity, exit_opacity);
    match classify(entry.kind, exit.kind) {
        Pairing::Fade => PropertySet {
            opacity,
            ..PropertySet::EMPTY
        },
        Pairing::Scale => PropertySet {
            opacity,
            scale_x: product(a.scale_x, b.scale_x),
            scale_y: product(a.scale_y, b.scale_y),
            ..PropertySet::EMPTY
        },
        Pairing::Rotate => PropertySet {
            opacity,
            rotate: Some(a.rotate.unwrap_or(0.0) + b.rotate.unwrap_or(0.0)),
            ..PropertySet::EMPTY
        },
        Pairing::SlideX => match length_sum(a.translate_x, b.translate_x) {
            Some(sum) => PropertySet {
                opacity,
                translate_x: Some(sum),
                ..PropertySet::EMPTY
            },
            None => gated(frame, handoff, a, b, opacity),
        },
        Pairing::SlideY => match length_sum(a.translate_y, b.translate_y) {
            Some(sum) => PropertySet {
                opacity,
                translate_y: Some(sum),
                ..PropertySet::EMPTY
            },
            None => gated(frame, handoff, a, b, opacity),
        },
        Pairing::Gated => gated(frame, handoff, a, b, opacity),
    }
}

fn gated(
    frame: FrameIndex,
    handoff: FrameIndex,
    entry: PropertySet,
    exit: PropertySet,
    opacity: Option<f64>,
) -> PropertySet {
    let active = if frame < handoff { entry } else { exit };
    PropertySet { opacity, ..active }
}

/// Whether the exit leaves opacity at 1 on its own first frame.
pub(crate) fn starts_opaque(ev: &Evaluator, exit: &AnimationConfig, handoff: FrameIndex) -> bool {
    ev.evaluate_from(handoff, exit, handoff)
        .opacity
        .is_none_or(|o| (o - 1.0).abs() < 1e-9)
}

// An absent value is a factor of 1; the product is absent only when neither phase sets it.
fn product(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(1.0) * b.unwrap_or(1.0)),
    }
}

fn length_sum(a: Option<Length>, b: Option<Length>) -> Option<Length> {
    match (a, b) {
        (Some(a), Some(b)) => a.checked_add(b),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/dual.rs"]
mod tests;
