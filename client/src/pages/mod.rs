//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, mutation flows, 401
//! handling) and delegates rendering details to `components`.

pub mod audio;
pub mod examples;
pub mod login;
