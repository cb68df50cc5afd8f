pub(crate) mod length;
pub(crate) mod properties;
