pub mod batch;
pub mod config;
pub mod error;
pub mod factory;
pub mod local_storage;
pub mod reference_directions;

pub use crate::config::{ReferenceDirectionsConfig, DEFAULT_MAX_SECTIONS, DEFAULT_TOLERANCE};
pub use crate::error::{Error, Result};
pub use crate::reference_directions::boundary::boundary_points;
pub use crate::reference_directions::counter::count_directions;
pub use crate::reference_directions::grid::generate_grid;
pub use crate::reference_directions::lattice::{enumerate_directions, enumerate_directions_with};
pub use crate::reference_directions::search::{directions_for_count, directions_for_count_with, resolution_for_count};
pub use crate::reference_directions::ReferenceDirections;
