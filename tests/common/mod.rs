#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{
    assert_feature_sets_match, assert_layers_conform, assert_point_eq, assert_rings_closed,
};

pub use helpers::*;

pub use fixtures::*;
