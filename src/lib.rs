//! Home energy usage dashboard widget.
//!
//! Renders a single frame summarizing today's home energy flows from
//! Home Assistant sensor states: house load, solar generation, grid
//! import, battery charge, and peak/off-peak/total costs.
//!
//! # Pipeline
//!
//! The render pass is a straight line with no retained state:
//!
//! 1. [`states`]: one authenticated fetch of `/api/states`, decoded into
//!    an immutable snapshot
//! 2. [`tree`]: the item table is resolved against the snapshot into a
//!    widget tree (rows planned, icons tiered, values converted)
//! 3. [`widgets`]: the tree is painted onto the simulator display
//!
//! All fallible work happens in steps 1 and 2; painting only fails on an
//! icon name outside the catalog.

pub mod colors;
pub mod config;
pub mod error;
pub mod icons;
pub mod items;
pub mod layout;
pub mod states;
pub mod styles;
pub mod tree;
pub mod widgets;
