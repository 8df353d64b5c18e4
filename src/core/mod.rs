//! # Core Application Logic
//!
//! State and reducer for the country/attraction browser. It knows nothing
//! about any specific UI technology.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The event loop in `tui` executes effects (spawning fetches) and feeds
//! completions back in as actions, so all mutation stays on one owner.
//!
//! ## Modules
//!
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod state;
