/// egui widgets drawing the [`crate::state::AppState`].
pub mod charts;
pub mod panels;
