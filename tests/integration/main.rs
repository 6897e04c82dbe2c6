#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod engine_tests;
mod surface_tests;
