//! Startup loading for the overlay manifest.
//!
//! Drives the `Loading` state: the manifest asset is requested once, polled
//! until it resolves, and replaced by defaults if it cannot load.

/// Overlay manifest loading with warn-and-default failure handling.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
