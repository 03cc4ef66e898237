//! Strength analysis sections
//!
//! Each section examines one aspect of a candidate secret and reports the
//! points or penalties it contributes to the composite score.

mod length;
mod pattern;
mod variety;

pub(crate) use length::length_section;
pub(crate) use pattern::pattern_section;
pub(crate) use variety::variety_section;
