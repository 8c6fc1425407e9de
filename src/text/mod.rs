//! Font handling and Parley-backed shaping/measurement.

pub(crate) mod styler;
