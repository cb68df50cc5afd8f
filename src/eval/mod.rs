pub(crate) mod dual;
pub(crate) mod evaluator;
pub(crate) mod fingerprint;
pub(crate) mod motion;
pub(crate) mod sampling;
