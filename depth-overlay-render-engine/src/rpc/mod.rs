//! JSON-RPC 2.0 communication layer for the surrounding control surface.
//!
//! The immersive overlay is deployed inside an iframe whose parent page
//! owns the 2D controls. Messages flow both ways over `postMessage`:
//!
//! - **Requests** (`enter_immersive`, `exit_immersive`, `tap`,
//!   `double_tap`, `get_fps`) expect a response with a matching id.
//! - **Notifications** (`immersive_entered`, `immersive_exited`,
//!   `marker_placed`, `ruler_started`, `ruler_completed`, `ruler_reset`,
//!   `fps_update`) are one-way, engine to frontend.
//!
//! `enter_immersive` fails while the manifest is still loading or a session
//! is already up; the frontend must then leave its entry control enabled
//! for retry. `exit_immersive` always succeeds. Native builds compile the
//! same layer without the browser listener; the keyboard shortcuts stand in
//! for the frontend.

/// JSON-RPC message types, the outgoing queue resource, and the dispatch
/// systems.
pub mod web_rpc;
