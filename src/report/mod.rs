//! Search output and its text rendering.

mod render;
mod types;

pub use render::render_report;
pub use types::LoadoutReport;
