pub mod placement;
pub mod store;
pub mod week;
