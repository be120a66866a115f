//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and interaction surfaces; mutation flows
//! stay in the pages and arrive here as callbacks.

pub mod audio_grid;
pub mod category_tabs;
pub mod confirm_dialog;
pub mod media_cell;
pub mod pair_grid;
pub mod preview_modal;
pub mod top_bar;
pub mod upload_dropzone;
