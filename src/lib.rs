//! Derives a data-art poster for a football match from its recorded statistics: each side's share
//! of four head-to-head statistics becomes a gradient bar, goals are placed on a 4×4 minute grid,
//! and the score is drawn as a symbol. Rendering is left to the caller; this crate produces the
//! poster's intermediate representation and its canvas layout.

pub mod catalog;
pub mod config;
pub mod file;
pub mod gradient;
pub mod grid;
pub mod layout;
pub mod match_data;
pub mod palette;
pub mod poster;
pub mod print;
pub mod stats;
pub mod text;
pub mod timeline;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
