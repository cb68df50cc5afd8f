use crate::foundation::core::{Affine, Size, Vec2};
use crate::style::length::Length;
use serde::{Deserialize, Serialize};

/// Clip-rectangle inset per edge, in percent of the element size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipInset {
    /// Top edge inset.
    pub top: f64,
    /// Right edge inset.
    pub right: f64,
    /// Bottom edge inset.
    pub bottom: f64,
    /// Left edge inset.
    pub left: f64,
}

/// Rotation about an arbitrary axis, angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotate3d {
    /// Axis x component.
    pub x: f64,
    /// Axis y component.
    pub y: f64,
    /// Axis z component.
    pub z: f64,
    /// Rotation angle in degrees.
    pub angle: f64,
}

impl Rotate3d {
    /// Rotation about the horizontal axis.
    pub fn about_x(angle: f64) -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            angle,
        }
    }

    /// Rotation about the vertical axis.
    pub fn about_y(angle: f64) -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            angle,
        }
    }
}

/// Sparse bag of visual property values for one frame.
///
/// Only the properties an animation kind drives are populated. Absent properties are `None`
/// rather than a neutral value so callers can merge the set over their base styles without
/// clobbering them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySet {
    /// Opacity in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Horizontal translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<Length>,
    /// Vertical translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<Length>,
    /// Horizontal scale factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// Vertical scale factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// 2D rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// 3D rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate3d: Option<Rotate3d>,
    /// Perspective distance in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f64>,
    /// Clip-rectangle inset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_inset: Option<ClipInset>,
    /// Gaussian blur radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Brightness factor (`1.0` is unchanged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
}

impl PropertySet {
    /// The empty set: no animation.
    pub const EMPTY: Self = Self {
        opacity: None,
        translate_x: None,
        translate_y: None,
        scale_x: None,
        scale_y: None,
        rotate: None,
        rotate3d: None,
        perspective: None,
        clip_inset: None,
        blur: None,
        brightness: None,
    };

    /// Whether no property is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Set a uniform scale on both axes.
    pub fn with_scale(mut self, s: f64) -> Self {
        self.scale_x = Some(s);
        self.scale_y = Some(s);
        self
    }

    /// Overlay `self` on `base`: populated properties of `self` win.
    pub fn merged_over(self, base: PropertySet) -> PropertySet {
        PropertySet {
            opacity: self.opacity.or(base.opacity),
            translate_x: self.translate_x.or(base.translate_x),
            translate_y: self.translate_y.or(base.translate_y),
            scale_x: self.scale_x.or(base.scale_x),
            scale_y: self.scale_y.or(base.scale_y),
            rotate: self.rotate.or(base.rotate),
            rotate3d: self.rotate3d.or(base.rotate3d),
            perspective: self.perspective.or(base.perspective),
            clip_inset: self.clip_inset.or(base.clip_inset),
            blur: self.blur.or(base.blur),
            brightness: self.brightness.or(base.brightness),
        }
    }

    /// CSS `transform` value, or `None` when no transform property is populated.
    ///
    /// Functions are emitted in a fixed order: perspective, translate, rotate, rotate3d, scale.
    pub fn transform_css(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({p}px)"));
        }
        if let Some(x) = self.translate_x {
            parts.push(format!("translateX({})", x.css()));
        }
        if let Some(y) = self.translate_y {
            parts.push(format!("translateY({})", y.css()));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({r}deg)"));
        }
        if let Some(r) = self.rotate3d {
            parts.push(format!(
                "rotate3d({}, {}, {}, {}deg)",
                r.x, r.y, r.z, r.angle
            ));
        }
        match (self.scale_x, self.scale_y) {
            (Some(x), Some(y)) if x == y => parts.push(format!("scale({x})")),
            (sx, sy) => {
                if let Some(x) = sx {
                    parts.push(format!("scaleX({x})"));
                }
                if let Some(y) = sy {
                    parts.push(format!("scaleY({y})"));
                }
            }
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// CSS `filter` value, or `None` when no filter property is populated.
    pub fn filter_css(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(b) = self.blur {
            parts.push(format!("blur({b}px)"));
        }
        if let Some(b) = self.brightness {
            parts.push(format!("brightness({b})"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// CSS `clip-path` value for the inset, if any.
    pub fn clip_path_css(&self) -> Option<String> {
        self.clip_inset.map(|c| {
            format!(
                "inset({}% {}% {}% {}%)",
                c.top, c.right, c.bottom, c.left
            )
        })
    }

    /// The 2D part of the transform as an affine around the element centre.
    ///
    /// Percent translations resolve against `element`. 3D rotation and perspective are not
    /// representable and are ignored.
    pub fn to_affine(&self, element: Size) -> Affine {
        let translate = Vec2::new(
            self.translate_x.map_or(0.0, |l| l.resolve(element.width)),
            self.translate_y.map_or(0.0, |l| l.resolve(element.height)),
        );
        let anchor = Vec2::new(element.width * 0.5, element.height * 0.5);
        let rotation_rad = self.rotate.unwrap_or(0.0).to_radians();
        let scale = Vec2::new(self.scale_x.unwrap_or(1.0), self.scale_y.unwrap_or(1.0));

        // Canonical order:
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        Affine::translate(translate)
            * Affine::translate(anchor)
            * Affine::rotate(rotation_rad)
            * Affine::scale_non_uniform(scale.x, scale.y)
            * Affine::translate(-anchor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/properties.rs"]
mod tests;
