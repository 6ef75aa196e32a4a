//! Data layer: sample storage, view windows, export encoding.

pub mod export;
pub mod series;
pub mod view;
