//! Flossverter finds the closest matches for a color among a palette of named colors, such as the
//! shade card of an embroidery thread manufacturer. Given a color from one palette (or any hex
//! code), it ranks every color of another palette by one of several published color-difference
//! metrics and returns the best few.
//!
//! The pipeline is small and entirely deterministic: a hex code becomes an [`RGBColor`], which
//! converts on demand to CIE XYZ, CIELAB and CIELCH; a [`Metric`] scores a pair of colors; and the
//! [`similarity`] ranker sorts a palette by those scores. None of it keeps any state besides the
//! catalogues themselves, which are read-only once loaded.
//!
//! [`RGBColor`]: color::RGBColor
//! [`Metric`]: metrics::Metric

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.0193339 with 0.019_333_9
#![allow(clippy::unreadable_literal)]
// RGB, XYZ, CIE and CMC are names, not words
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod catalogue;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod distance;
pub mod metrics;
pub mod prelude;
pub mod similarity;
