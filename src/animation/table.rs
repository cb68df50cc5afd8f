//! Formula table: one pure `progress -> PropertySet` mapping per [`AnimationKind`].
//!
//! Conventions: `p` is progress (spring progress for the spring family), left/top travel is
//! negative, angles are degrees, clip insets are percent.

use std::f64::consts::{PI, TAU};

use crate::animation::config::CustomParams;
use crate::animation::ease::Ease;
use crate::animation::kind::AnimationKind;
use crate::animation::progress::interpolate;
use crate::foundation::math::{Rng64, lerp};
use crate::style::length::Length;
use crate::style::properties::{ClipInset, PropertySet, Rotate3d};

/// Inputs to a single formula evaluation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sample<'a> {
    pub(crate) p: f64,
    pub(crate) custom: &'a CustomParams,
    /// Seed for kinds with pseudo-random jitter.
    pub(crate) seed: u64,
}

pub(crate) type Formula = fn(&Sample<'_>) -> PropertySet;

/// Evaluate `kind` at `progress`.
///
/// Inert and unknown kinds yield an empty set. `glitch` jitter is seeded from the progress value
/// and `custom.seed`, so this stays a pure function of its arguments.
pub fn apply(kind: AnimationKind, progress: f64, custom: &CustomParams) -> PropertySet {
    let seed = custom.seed.unwrap_or(0) ^ progress.to_bits();
    apply_seeded(kind, progress, custom, seed)
}

pub(crate) fn apply_seeded(
    kind: AnimationKind,
    progress: f64,
    custom: &CustomParams,
    seed: u64,
) -> PropertySet {
    match formula_for(kind) {
        Some(f) => f(&Sample {
            p: progress,
            custom,
            seed,
        }),
        None => PropertySet::EMPTY,
    }
}

pub(crate) fn formula_for(kind: AnimationKind) -> Option<Formula> {
    use AnimationKind as K;
    let f: Formula = match kind {
        K::None | K::Unknown => return None,

        K::FadeIn => fade_in,
        K::FadeOut => fade_out,

        K::SlideInLeft => slide_in_left,
        K::SlideInRight => slide_in_right,
        K::SlideInTop => slide_in_top,
        K::SlideInBottom => slide_in_bottom,
        K::SlideOutLeft => slide_out_left,
        K::SlideOutRight => slide_out_right,
        K::SlideOutTop => slide_out_top,
        K::SlideOutBottom => slide_out_bottom,

        K::ScaleIn => scale_in,
        K::ScaleOut => scale_out,
        K::ScaleInX => scale_in_x,
        K::ScaleInY => scale_in_y,
        K::ScaleOutX => scale_out_x,
        K::ScaleOutY => scale_out_y,
        K::ZoomIn => zoom_in,
        K::ZoomOut => zoom_out,

        K::RevealLeft => |s| reveal(Edge::Left, 1.0 - s.p),
        K::RevealRight => |s| reveal(Edge::Right, 1.0 - s.p),
        K::RevealTop => |s| reveal(Edge::Top, 1.0 - s.p),
        K::RevealBottom => |s| reveal(Edge::Bottom, 1.0 - s.p),
        K::CollapseLeft => |s| reveal(Edge::Left, s.p),
        K::CollapseRight => |s| reveal(Edge::Right, s.p),
        K::CollapseTop => |s| reveal(Edge::Top, s.p),
        K::CollapseBottom => |s| reveal(Edge::Bottom, s.p),

        K::RotateIn => rotate_in,
        K::RotateOut => rotate_out,

        K::SpringIn => spring_in,
        K::SpringOut => spring_out,
        K::SpringSlideLeft => |s| translate_x(s.custom.distance_or(Length::FULL), -(1.0 - s.p)),
        K::SpringSlideRight => |s| translate_x(s.custom.distance_or(Length::FULL), 1.0 - s.p),
        K::SpringSlideUp => |s| translate_y(s.custom.distance_or(Length::FULL), 1.0 - s.p),
        K::SpringSlideDown => |s| translate_y(s.custom.distance_or(Length::FULL), -(1.0 - s.p)),
        K::SpringRotate => rotate_in,
        K::SpringBounce => spring_bounce,
        K::SpringWobble => spring_wobble,
        K::SpringPop => spring_pop,

        K::FlipInX => |s| flip(s, Rotate3d::about_x, 1.0 - s.p),
        K::FlipInY => |s| flip(s, Rotate3d::about_y, 1.0 - s.p),
        K::FlipOutX => |s| flip(s, Rotate3d::about_x, -s.p),
        K::FlipOutY => |s| flip(s, Rotate3d::about_y, -s.p),
        K::Swing => swing,
        K::ZoomPerspective => zoom_perspective,
        K::Glitch => glitch,
        K::BlurIn => |s| blur(s, 1.0 - s.p),
        K::BlurOut => |s| blur(s, s.p),
        K::PopIn => pop_in,
        K::BounceIn => bounce_in,
        K::Shake => shake,
        K::Pulse => pulse,
        K::FadeSlideUp => |s| fade_slide(s, 1.0),
        K::FadeSlideDown => |s| fade_slide(s, -1.0),
    };
    Some(f)
}

fn opacity(v: f64) -> PropertySet {
    PropertySet {
        opacity: Some(v),
        ..PropertySet::EMPTY
    }
}

fn translate_x(d: Length, factor: f64) -> PropertySet {
    PropertySet {
        translate_x: Some(d.scaled(factor)),
        ..PropertySet::EMPTY
    }
}

fn translate_y(d: Length, factor: f64) -> PropertySet {
    PropertySet {
        translate_y: Some(d.scaled(factor)),
        ..PropertySet::EMPTY
    }
}

fn uniform_scale(v: f64) -> PropertySet {
    PropertySet::EMPTY.with_scale(v)
}

fn rotate(deg: f64) -> PropertySet {
    PropertySet {
        rotate: Some(deg + 0.0),
        ..PropertySet::EMPTY
    }
}

fn fade_in(s: &Sample<'_>) -> PropertySet {
    opacity(s.p)
}

fn fade_out(s: &Sample<'_>) -> PropertySet {
    opacity(1.0 - s.p)
}

fn slide_in_left(s: &Sample<'_>) -> PropertySet {
    translate_x(s.custom.distance_or(Length::FULL), -(1.0 - s.p))
}

fn slide_in_right(s: &Sample<'_>) -> PropertySet {
    translate_x(s.custom.distance_or(Length::FULL), 1.0 - s.p)
}

fn slide_in_top(s: &Sample<'_>) -> PropertySet {
    translate_y(s.custom.distance_or(Length::FULL), -(1.0 - s.p))
}

fn slide_in_bottom(s: &Sample<'_>) -> PropertySet {
    translate_y(s.custom.distance_or(Length::FULL), 1.0 - s.p)
}

fn slide_out_left(s: &Sample<'_>) -> PropertySet {
    translate_x(s.custom.distance_or(Length::FULL), -s.p)
}

fn slide_out_right(s: &Sample<'_>) -> PropertySet {
    translate_x(s.custom.distance_or(Length::FULL), s.p)
}

fn slide_out_top(s: &Sample<'_>) -> PropertySet {
    translate_y(s.custom.distance_or(Length::FULL), -s.p)
}

fn slide_out_bottom(s: &Sample<'_>) -> PropertySet {
    translate_y(s.custom.distance_or(Length::FULL), s.p)
}

const SCALE_FROM: f64 = 0.5;
const ZOOM_FROM: f64 = 1.5;

fn scale_in(s: &Sample<'_>) -> PropertySet {
    uniform_scale(lerp(s.custom.scale_or(SCALE_FROM), 1.0, s.p))
}

fn scale_out(s: &Sample<'_>) -> PropertySet {
    uniform_scale(lerp(1.0, s.custom.scale_or(SCALE_FROM), s.p))
}

fn scale_in_x(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        scale_x: Some(lerp(s.custom.scale_or(SCALE_FROM), 1.0, s.p)),
        ..PropertySet::EMPTY
    }
}

fn scale_in_y(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        scale_y: Some(lerp(s.custom.scale_or(SCALE_FROM), 1.0, s.p)),
        ..PropertySet::EMPTY
    }
}

fn scale_out_x(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        scale_x: Some(lerp(1.0, s.custom.scale_or(SCALE_FROM), s.p)),
        ..PropertySet::EMPTY
    }
}

fn scale_out_y(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        scale_y: Some(lerp(1.0, s.custom.scale_or(SCALE_FROM), s.p)),
        ..PropertySet::EMPTY
    }
}

fn zoom_in(s: &Sample<'_>) -> PropertySet {
    uniform_scale(lerp(s.custom.scale_or(ZOOM_FROM), 1.0, s.p))
}

fn zoom_out(s: &Sample<'_>) -> PropertySet {
    uniform_scale(lerp(1.0, s.custom.scale_or(ZOOM_FROM), s.p))
}

#[derive(Clone, Copy)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

fn reveal(edge: Edge, covered: f64) -> PropertySet {
    let pct = covered * 100.0;
    let mut inset = ClipInset::default();
    match edge {
        Edge::Top => inset.top = pct,
        Edge::Right => inset.right = pct,
        Edge::Bottom => inset.bottom = pct,
        Edge::Left => inset.left = pct,
    }
    PropertySet {
        clip_inset: Some(inset),
        ..PropertySet::EMPTY
    }
}

const ROTATE_ANGLE: f64 = 90.0;

fn rotate_in(s: &Sample<'_>) -> PropertySet {
    rotate(-(1.0 - s.p) * s.custom.angle_or(ROTATE_ANGLE))
}

fn rotate_out(s: &Sample<'_>) -> PropertySet {
    rotate(s.p * s.custom.angle_or(ROTATE_ANGLE))
}

fn spring_in(s: &Sample<'_>) -> PropertySet {
    uniform_scale(s.p)
}

fn spring_out(s: &Sample<'_>) -> PropertySet {
    uniform_scale((1.0 - s.p).max(0.0))
}

fn spring_bounce(s: &Sample<'_>) -> PropertySet {
    let k = s.custom.oscillations_or(2.0);
    let amp = 0.1 * s.custom.intensity_or(1.0);
    uniform_scale(s.p * (1.0 + amp * (s.p * TAU * k).sin()))
}

fn spring_wobble(s: &Sample<'_>) -> PropertySet {
    let k = s.custom.oscillations_or(3.0);
    rotate(s.custom.angle_or(12.0) * (s.p * TAU * k).sin() * (1.0 - s.p))
}

fn spring_pop(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        opacity: Some(s.p.clamp(0.0, 1.0)),
        ..uniform_scale(s.p)
    }
}

fn flip(s: &Sample<'_>, axis: fn(f64) -> Rotate3d, turn: f64) -> PropertySet {
    PropertySet {
        rotate3d: Some(axis(turn * s.custom.angle_or(90.0) + 0.0)),
        perspective: Some(s.custom.perspective_or(800.0)),
        ..PropertySet::EMPTY
    }
}

fn swing(s: &Sample<'_>) -> PropertySet {
    let k = s.custom.oscillations_or(3.0);
    let angle = s.custom.angle_or(15.0) * (s.p * TAU * k).sin() * (1.0 - s.p);
    PropertySet {
        rotate3d: Some(Rotate3d::about_x(angle + 0.0)),
        perspective: Some(s.custom.perspective_or(800.0)),
        ..PropertySet::EMPTY
    }
}

fn zoom_perspective(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        opacity: Some(s.p),
        rotate3d: Some(Rotate3d::about_x((1.0 - s.p) * s.custom.angle_or(30.0))),
        perspective: Some(s.custom.perspective_or(1000.0)),
        ..uniform_scale(lerp(s.custom.scale_or(0.8), 1.0, s.p))
    }
}

fn glitch(s: &Sample<'_>) -> PropertySet {
    // Jitter amplitude decays to zero as the glitch resolves.
    let amp = (1.0 - s.p).clamp(0.0, 1.0) * s.custom.intensity_or(1.0);
    let mut rng = Rng64::new(s.seed);
    let jx = rng.next_signed();
    let jy = rng.next_signed();
    let flicker = rng.next_f64_01();
    let flash = rng.next_signed();
    PropertySet {
        opacity: Some((1.0 - 0.35 * amp * flicker).clamp(0.0, 1.0)),
        translate_x: Some(Length::Px(20.0).scaled(jx * amp)),
        translate_y: Some(Length::Px(6.0).scaled(jy * amp)),
        brightness: Some(1.0 + 0.5 * amp * flash),
        ..PropertySet::EMPTY
    }
}

fn blur(s: &Sample<'_>, amount: f64) -> PropertySet {
    PropertySet {
        opacity: Some(1.0 - amount),
        blur: Some(amount * 10.0 * s.custom.intensity_or(1.0)),
        ..PropertySet::EMPTY
    }
}

fn pop_in(s: &Sample<'_>) -> PropertySet {
    let peak = s.custom.scale_or(1.1);
    let scale = if s.p < 0.7 {
        interpolate(s.p, (0.0, 0.7), (0.0, peak), Ease::OutQuad)
    } else {
        interpolate(s.p, (0.7, 1.0), (peak, 1.0), Ease::InOutQuad)
    };
    PropertySet {
        opacity: Some(interpolate(s.p, (0.0, 0.4), (0.0, 1.0), Ease::Linear)),
        ..uniform_scale(scale)
    }
}

fn bounce_in(s: &Sample<'_>) -> PropertySet {
    PropertySet {
        opacity: Some(interpolate(s.p, (0.0, 0.3), (0.0, 1.0), Ease::Linear)),
        ..uniform_scale(Ease::BounceOut.apply(s.p))
    }
}

fn shake(s: &Sample<'_>) -> PropertySet {
    let k = s.custom.oscillations_or(6.0);
    let amp = s.custom.intensity_or(1.0) * (1.0 - s.p);
    translate_x(
        s.custom.distance_or(Length::Px(10.0)),
        (s.p * TAU * k).sin() * amp,
    )
}

fn pulse(s: &Sample<'_>) -> PropertySet {
    let k = s.custom.oscillations_or(1.0);
    let amp = 0.08 * s.custom.intensity_or(1.0);
    uniform_scale(1.0 + amp * (s.p * PI * k).sin().powi(2))
}

fn fade_slide(s: &Sample<'_>, from_below: f64) -> PropertySet {
    PropertySet {
        opacity: Some(s.p),
        ..translate_y(s.custom.distance_or(Length::Px(40.0)), from_below * (1.0 - s.p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
