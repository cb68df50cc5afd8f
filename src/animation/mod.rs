pub(crate) mod config;
pub(crate) mod ease;
pub(crate) mod kind;
pub(crate) mod progress;
pub(crate) mod spring;
pub(crate) mod stagger;
pub(crate) mod table;
