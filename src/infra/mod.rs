pub mod factory;
pub mod renderer;
pub mod repositories;
