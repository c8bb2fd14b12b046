//! JSON-RPC 2.0 bridge between the viewer and the page that embeds it.
//!
//! Messages travel over `window.postMessage`. Requests carry an `id` and get
//! a response with the same id; notifications flow one way, from the viewer
//! to the parent window.
//!
//! ```text
//! Page (parent window)  <──postMessage──>  Viewer (canvas frame)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │ <───────────────── Response (with ID) ─┤
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! ## Methods
//!
//! - `viewer_start` / `viewer_stop`: resume or tear down the viewer
//! - `get_orientation`: pointer, target and current orientation
//! - `get_load_status`: `idle`, `pending`, `ready` or `failed`
//! - `get_viewer_config`: the active [`ViewerConfig`](crate::engine::core::config::ViewerConfig)
//! - `get_fps`: smoothed frame rate
//! - `get_phase`: `running` or `stopped`
//!
//! ## Notifications
//!
//! - `model_loaded` with the clip count
//! - `model_load_failed` with the error text
//! - `fps_update` twice a second
//!
//! ## Error codes
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// Message types, request dispatch and the WASM `message` listener.
pub mod web_rpc;
