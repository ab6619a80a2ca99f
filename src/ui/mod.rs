pub mod analytics;
pub mod panels;
pub mod plot;
pub mod predict;
