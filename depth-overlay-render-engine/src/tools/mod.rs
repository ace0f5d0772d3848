//! Interactive tools for the immersive depth overlay.
//!
//! Provides tap-driven marker placement, the two-point ruler, and the
//! session lifecycle, all operating on explicit resources so the state
//! machines are testable without any rendering in the loop.
//!
//! ## Gesture Flow
//!
//! ```text
//! Mouse press / RPC tap
//!   └─> TapRecognizer (single vs double, deferred dispatch)
//!       ├─> SingleTap ─> place_marker_system ─> RulerTool::record_placement
//!       └─> DoubleTap ─> reset_ruler_system
//! ```
//!
//! ## Marker Cycle
//!
//! Every single tap places a sphere marker along the viewer's forward axis
//! at the next distance in the repeating cycle (0.5 m → 1.5 m → 3.0 m),
//! coloured by distance band (near/mid/far).
//!
//! ## Ruler
//!
//! Placements alternate between endpoint A and endpoint B. While both
//! endpoints exist, a label shows the distance between them at their
//! midpoint, refreshed every frame so it tracks the head-anchored scene.
//! A double tap returns the ruler to "awaiting A"; starting a fresh pair
//! discards the previous endpoints and label. Ruler pairing is always on:
//! there is no separate label-only placement mode.

/// Tap recognition: single vs double press disambiguation.
pub mod gestures;

/// Cycled depth marker placement with distance-band colouring.
pub mod marker;

/// Two-point ruler state machine and midpoint label refresh.
pub mod ruler;

/// Immersive session setup, teardown, and lifecycle shortcuts.
pub mod session;
