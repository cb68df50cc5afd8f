use serde::{Deserialize, Serialize};

/// Every animation the engine knows how to evaluate.
///
/// The set is closed: the formula table matches on it exhaustively. Names that do not parse
/// become [`AnimationKind::Unknown`], which evaluates to an empty property set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// No animation (used to disable an exit phase).
    None,
    /// A kind name that did not parse.
    Unknown,

    /// Opacity from 0 to 1.
    FadeIn,
    /// Opacity from 1 to 0.
    FadeOut,

    /// Enters from the left edge.
    SlideInLeft,
    /// Enters from the right edge.
    SlideInRight,
    /// Enters from above.
    SlideInTop,
    /// Enters from below.
    SlideInBottom,
    /// Leaves towards the left edge.
    SlideOutLeft,
    /// Leaves towards the right edge.
    SlideOutRight,
    /// Leaves upwards.
    SlideOutTop,
    /// Leaves downwards.
    SlideOutBottom,

    /// Uniform scale up to 1 from a smaller size.
    ScaleIn,
    /// Uniform scale down from 1.
    ScaleOut,
    /// Horizontal scale up to 1.
    ScaleInX,
    /// Vertical scale up to 1.
    ScaleInY,
    /// Horizontal scale down from 1.
    ScaleOutX,
    /// Vertical scale down from 1.
    ScaleOutY,
    /// Uniform scale down to 1 from a larger size.
    ZoomIn,
    /// Uniform scale up from 1.
    ZoomOut,

    /// Left clip inset shrinks from 100% to 0.
    RevealLeft,
    /// Right clip inset shrinks from 100% to 0.
    RevealRight,
    /// Top clip inset shrinks from 100% to 0.
    RevealTop,
    /// Bottom clip inset shrinks from 100% to 0.
    RevealBottom,
    /// Left clip inset grows from 0 to 100%.
    CollapseLeft,
    /// Right clip inset grows from 0 to 100%.
    CollapseRight,
    /// Top clip inset grows from 0 to 100%.
    CollapseTop,
    /// Bottom clip inset grows from 0 to 100%.
    CollapseBottom,

    /// Rotates from a negative angle to 0.
    RotateIn,
    /// Rotates from 0 to a positive angle.
    RotateOut,

    /// Spring-driven scale from 0 to 1.
    SpringIn,
    /// Spring-driven scale from 1 to 0.
    SpringOut,
    /// Spring-driven entry from the left.
    SpringSlideLeft,
    /// Spring-driven entry from the right.
    SpringSlideRight,
    /// Spring-driven entry from below.
    SpringSlideUp,
    /// Spring-driven entry from above.
    SpringSlideDown,
    /// Spring-driven rotation to 0.
    SpringRotate,
    /// Spring-driven scale with a decaying ripple.
    SpringBounce,
    /// Spring-driven decaying rotation wobble.
    SpringWobble,
    /// Spring-driven scale and fade in.
    SpringPop,

    /// 3D flip about the horizontal axis into view.
    FlipInX,
    /// 3D flip about the vertical axis into view.
    FlipInY,
    /// 3D flip about the horizontal axis out of view.
    FlipOutX,
    /// 3D flip about the vertical axis out of view.
    FlipOutY,
    /// Decaying 3D swing about the horizontal axis.
    Swing,
    /// Fades in while tilting and scaling up in perspective.
    ZoomPerspective,
    /// Seeded jitter, flicker and flash that settle by the end.
    Glitch,
    /// Blur clears while opacity rises.
    BlurIn,
    /// Blur grows while opacity falls.
    BlurOut,
    /// Scales past 1 then settles, fading in early.
    PopIn,
    /// Bouncing scale up with an early fade in.
    BounceIn,
    /// Decaying horizontal shake.
    Shake,
    /// Brief uniform scale swell.
    Pulse,
    /// Fades in while rising a short distance.
    FadeSlideUp,
    /// Fades in while dropping a short distance.
    FadeSlideDown,
}

/// Coarse grouping of kinds by the properties they drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindFamily {
    /// `none` and unknown kinds.
    Inert,
    /// Opacity only.
    Opacity,
    /// Axis translation.
    Translate,
    /// Scale.
    Scale,
    /// Clip-rectangle reveal/collapse.
    Reveal,
    /// 2D rotation.
    Rotate,
    /// Driven by the spring evaluator.
    Spring,
    /// 3D rotation and perspective.
    Perspective,
    /// Filters and multi-property composites.
    Composite,
}

const KINDS: &[(&str, AnimationKind)] = &[
    ("none", AnimationKind::None),
    ("fadeIn", AnimationKind::FadeIn),
    ("fadeOut", AnimationKind::FadeOut),
    ("slideInLeft", AnimationKind::SlideInLeft),
    ("slideInRight", AnimationKind::SlideInRight),
    ("slideInTop", AnimationKind::SlideInTop),
    ("slideInBottom", AnimationKind::SlideInBottom),
    ("slideOutLeft", AnimationKind::SlideOutLeft),
    ("slideOutRight", AnimationKind::SlideOutRight),
    ("slideOutTop", AnimationKind::SlideOutTop),
    ("slideOutBottom", AnimationKind::SlideOutBottom),
    ("scaleIn", AnimationKind::ScaleIn),
    ("scaleOut", AnimationKind::ScaleOut),
    ("scaleInX", AnimationKind::ScaleInX),
    ("scaleInY", AnimationKind::ScaleInY),
    ("scaleOutX", AnimationKind::ScaleOutX),
    ("scaleOutY", AnimationKind::ScaleOutY),
    ("zoomIn", AnimationKind::ZoomIn),
    ("zoomOut", AnimationKind::ZoomOut),
    ("revealLeft", AnimationKind::RevealLeft),
    ("revealRight", AnimationKind::RevealRight),
    ("revealTop", AnimationKind::RevealTop),
    ("revealBottom", AnimationKind::RevealBottom),
    ("collapseLeft", AnimationKind::CollapseLeft),
    ("collapseRight", AnimationKind::CollapseRight),
    ("collapseTop", AnimationKind::CollapseTop),
    ("collapseBottom", AnimationKind::CollapseBottom),
    ("rotateIn", AnimationKind::RotateIn),
    ("rotateOut", AnimationKind::RotateOut),
    ("springIn", AnimationKind::SpringIn),
    ("springOut", AnimationKind::SpringOut),
    ("springSlideLeft", AnimationKind::SpringSlideLeft),
    ("springSlideRight", AnimationKind::SpringSlideRight),
    ("springSlideUp", AnimationKind::SpringSlideUp),
    ("springSlideDown", AnimationKind::SpringSlideDown),
    ("springRotate", AnimationKind::SpringRotate),
    ("springBounce", AnimationKind::SpringBounce),
    ("springWobble", AnimationKind::SpringWobble),
    ("springPop", AnimationKind::SpringPop),
    ("flipInX", AnimationKind::FlipInX),
    ("flipInY", AnimationKind::FlipInY),
    ("flipOutX", AnimationKind::FlipOutX),
    ("flipOutY", AnimationKind::FlipOutY),
    ("swing", AnimationKind::Swing),
    ("zoomPerspective", AnimationKind::ZoomPerspective),
    ("glitch", AnimationKind::Glitch),
    ("blurIn", AnimationKind::BlurIn),
    ("blurOut", AnimationKind::BlurOut),
    ("popIn", AnimationKind::PopIn),
    ("bounceIn", AnimationKind::BounceIn),
    ("shake", AnimationKind::Shake),
    ("pulse", AnimationKind::Pulse),
    ("fadeSlideUp", AnimationKind::FadeSlideUp),
    ("fadeSlideDown", AnimationKind::FadeSlideDown),
];

impl AnimationKind {
    /// Every evaluable kind (excludes [`AnimationKind::Unknown`]), in table order.
    pub fn all() -> impl Iterator<Item = AnimationKind> {
        KINDS.iter().map(|(_, k)| *k)
    }

    /// Canonical camelCase name.
    pub fn name(self) -> &'static str {
        KINDS
            .iter()
            .find(|(_, k)| *k == self)
            .map_or("unknown", |(n, _)| *n)
    }

    /// Parse a kind name, ignoring case and `-`/`_` separators.
    pub fn from_name(name: &str) -> Option<Self> {
        let folded = fold(name);
        KINDS
            .iter()
            .find(|(n, _)| fold(n) == folded)
            .map(|(_, k)| *k)
    }

    /// Like [`AnimationKind::from_name`], but unknown names become [`AnimationKind::Unknown`].
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(kind = name, "unknown animation kind; evaluating as no-op");
            Self::Unknown
        })
    }

    /// Family this kind belongs to.
    pub fn family(self) -> KindFamily {
        use AnimationKind::*;
        match self {
            None | Unknown => KindFamily::Inert,
            FadeIn | FadeOut => KindFamily::Opacity,
            SlideInLeft | SlideInRight | SlideInTop | SlideInBottom | SlideOutLeft
            | SlideOutRight | SlideOutTop | SlideOutBottom => KindFamily::Translate,
            ScaleIn | ScaleOut | ScaleInX | ScaleInY | ScaleOutX | ScaleOutY | ZoomIn
            | ZoomOut => KindFamily::Scale,
            RevealLeft | RevealRight | RevealTop | RevealBottom | CollapseLeft | CollapseRight
            | CollapseTop | CollapseBottom => KindFamily::Reveal,
            RotateIn | RotateOut => KindFamily::Rotate,
            SpringIn | SpringOut | SpringSlideLeft | SpringSlideRight | SpringSlideUp
            | SpringSlideDown | SpringRotate | SpringBounce | SpringWobble | SpringPop => {
                KindFamily::Spring
            }
            FlipInX | FlipInY | FlipOutX | FlipOutY | Swing | ZoomPerspective => {
                KindFamily::Perspective
            }
            Glitch | BlurIn | BlurOut | PopIn | BounceIn | Shake | Pulse | FadeSlideUp
            | FadeSlideDown => KindFamily::Composite,
        }
    }

    /// Whether progress for this kind comes from the spring evaluator.
    pub fn is_spring_driven(self) -> bool {
        self.family() == KindFamily::Spring
    }

    /// Whether this kind evaluates to nothing.
    pub fn is_inert(self) -> bool {
        self.family() == KindFamily::Inert
    }
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Serialize for AnimationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AnimationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_name_lenient(&s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kind.rs"]
mod tests;
