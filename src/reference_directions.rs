pub mod boundary;
pub mod counter;
pub mod grid;
pub mod lattice;
pub mod search;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use crate::config::ReferenceDirectionsConfig;
use crate::error::Result;
use crate::reference_directions::boundary::boundary_points;
use crate::reference_directions::lattice::enumerate_directions_with;
use crate::reference_directions::search::directions_for_count_with;

/// An ordered set of points on the unit simplex.
///
/// Every direction has exactly `n_obj` coordinates. The set is immutable
/// once built; use [`ReferenceDirections::into_inner`] to take the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDirections {
    n_obj: usize,
    reference_directions: Vec<Vec<f64>>,
}

impl ReferenceDirections {
    pub(crate) fn new(n_obj: usize, reference_directions: Vec<Vec<f64>>) -> Self {
        ReferenceDirections {
            n_obj,
            reference_directions,
        }
    }

    /// Das-Dennis lattice with `n_sections` subdivisions per axis
    pub fn from_sections(n_obj: usize, n_sections: usize) -> Result<Self> {
        Self::from_sections_with(n_obj, n_sections, &ReferenceDirectionsConfig::default())
    }

    pub fn from_sections_with(n_obj: usize, n_sections: usize, config: &ReferenceDirectionsConfig) -> Result<Self> {
        let reference_directions = enumerate_directions_with(n_obj, n_sections, config)?;

        Ok(Self::new(n_obj, reference_directions))
    }

    /// Largest Das-Dennis lattice with strictly fewer than `n_refs` directions
    pub fn from_count(n_obj: usize, n_refs: usize) -> Result<Self> {
        Self::from_count_with(n_obj, n_refs, &ReferenceDirectionsConfig::default())
    }

    pub fn from_count_with(n_obj: usize, n_refs: usize, config: &ReferenceDirectionsConfig) -> Result<Self> {
        let reference_directions = directions_for_count_with(n_obj, n_refs, config)?;

        Ok(Self::new(n_obj, reference_directions))
    }

    /// Two interior seed points plus the unit basis; two objectives only
    pub fn boundary(n_obj: usize) -> Result<Self> {
        Ok(Self::new(n_obj, boundary_points(n_obj)?))
    }

    pub fn n_obj(&self) -> usize {
        self.n_obj
    }

    pub fn len(&self) -> usize {
        self.reference_directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference_directions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.reference_directions.iter()
    }

    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.reference_directions
    }

    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.reference_directions
    }

    /// One row per direction, `n_obj` columns
    pub fn to_array(&self) -> Result<Array2<f64>> {
        let array = Array2::from_shape_vec(
            (self.len(), self.n_obj),
            self.reference_directions.concat(),
        )?;

        Ok(array)
    }
}

impl<'a> IntoIterator for &'a ReferenceDirections {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
