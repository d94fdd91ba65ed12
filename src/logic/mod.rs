//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - filename: Download filename sanitization
//! - fit: Viewer image scaling math
//! - gesture: Swipe detection from drag coordinates
//! - grid: Card grid geometry and selection movement
//! - navigation: Circular index calculations for the viewer
//! - shuffle: Unbiased in-place permutation
//! - sorting: Record ordering by display name
//! - ui: UI state transitions and timers

pub mod filename;
pub mod fit;
pub mod gesture;
pub mod grid;
pub mod navigation;
pub mod shuffle;
pub mod sorting;
pub mod ui;
