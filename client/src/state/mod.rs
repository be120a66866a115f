//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `assets`, `audio`, `ui`) so pages and
//! components can depend on small focused models provided via context.

pub mod assets;
pub mod audio;
pub mod auth;
pub mod ui;
