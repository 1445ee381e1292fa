pub use api::Visualizer;

mod api;
pub mod filter;
pub mod transform;
pub mod validation;
