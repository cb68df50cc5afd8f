use crate::foundation::math::Fnv1a64;
use crate::style::length::Length;
use crate::style::properties::PropertySet;

/// 128-bit digest of an evaluated [`PropertySet`], built from two independently seeded FNV-1a
/// streams over exact float bits.
///
/// Equal sets always share a fingerprint; `0.0` and `-0.0` do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyFingerprint {
    /// First stream.
    pub hi: u64,
    /// Second stream.
    pub lo: u64,
}

/// Fingerprint a single property set.
pub fn fingerprint_properties(props: &PropertySet) -> PropertyFingerprint {
    let mut fp = Pair::new();
    fp.props(props);
    fp.finish()
}

/// Fingerprint an ordered sequence of property sets (e.g. a sampled frame range).
pub fn fingerprint_sequence<'a>(
    sets: impl IntoIterator<Item = &'a PropertySet>,
) -> PropertyFingerprint {
    let mut fp = Pair::new();
    let mut n = 0u64;
    for props in sets {
        fp.props(props);
        n += 1;
    }
    fp.u64(n);
    fp.finish()
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(x) => {
                self.u8(1);
                self.f64(x);
            }
            None => self.u8(0),
        }
    }

    fn opt_len(&mut self, v: Option<Length>) {
        match v {
            Some(Length::Px(x)) => {
                self.u8(1);
                self.f64(x);
            }
            Some(Length::Percent(x)) => {
                self.u8(2);
                self.f64(x);
            }
            None => self.u8(0),
        }
    }

    fn props(&mut self, p: &PropertySet) {
        self.opt_f64(p.opacity);
        self.opt_len(p.translate_x);
        self.opt_len(p.translate_y);
        self.opt_f64(p.scale_x);
        self.opt_f64(p.scale_y);
        self.opt_f64(p.rotate);
        match p.rotate3d {
            Some(r) => {
                self.u8(1);
                for v in [r.x, r.y, r.z, r.angle] {
                    self.f64(v);
                }
            }
            None => self.u8(0),
        }
        self.opt_f64(p.perspective);
        match p.clip_inset {
            Some(c) => {
                self.u8(1);
                for v in [c.top, c.right, c.bottom, c.left] {
                    self.f64(v);
                }
            }
            None => self.u8(0),
        }
        self.opt_f64(p.blur);
        self.opt_f64(p.brightness);
    }

    fn finish(self) -> PropertyFingerprint {
        PropertyFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
