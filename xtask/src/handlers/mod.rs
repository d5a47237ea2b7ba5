pub mod apps;
pub mod build;
pub mod libs;
pub mod setup;
pub mod testing;
