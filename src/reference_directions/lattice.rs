use tracing::debug;
use crate::config::ReferenceDirectionsConfig;
use crate::error::{Error, Result};
use crate::reference_directions::counter::count_directions;
use crate::reference_directions::grid::generate_grid;

/// All Das-Dennis directions for `n_obj` objectives and `n_sections` subdivisions,
/// using the default tolerance.
pub fn enumerate_directions(n_obj: usize, n_sections: usize) -> Result<Vec<Vec<f64>>> {
    enumerate_directions_with(n_obj, n_sections, &ReferenceDirectionsConfig::default())
}

/// Depth-first walk over the axis grid.
///
/// A branch is dropped as soon as its partial sum exceeds `1 + tolerance`.
/// A complete direction is kept when `1 - sum < tolerance`. Output follows the
/// grid order, so it is deterministic for a given `(n_obj, n_sections)`.
///
/// `n_obj == 1` always yields `[[1.0]]`. `n_sections == 0` yields the simplex
/// centroid, the only point of a zero-resolution lattice. A lattice whose size
/// does not fit `usize` fails with [`Error::CountOverflow`].
pub fn enumerate_directions_with(n_obj: usize, n_sections: usize, config: &ReferenceDirectionsConfig) -> Result<Vec<Vec<f64>>> {
    config.validate()?;

    if n_obj == 0 {
        return Err(Error::InvalidArgument("n_obj must be positive".to_string()));
    }

    if n_obj == 1 {
        return Ok(vec![vec![1.0]]);
    }

    // rejects lattices too large to index before any allocation
    count_directions(n_obj, n_sections)?;

    let ref_dirs = if n_sections == 0 {
        vec![vec![1.0 / (n_obj as f64); n_obj]]
    } else {
        let sections = generate_grid(n_sections);

        let mut ref_dirs = vec![];
        let mut ref_dir = vec![0.0; n_obj];
        das_dennis_recursion(&mut ref_dirs, &mut ref_dir, &sections, 0.0, 0, config.tolerance);

        ref_dirs
    };

    debug!(n_obj, n_sections, count = ref_dirs.len(), "enumerated reference directions");

    Ok(ref_dirs)
}

fn das_dennis_recursion(
    ref_dirs: &mut Vec<Vec<f64>>,
    ref_dir: &mut [f64],
    sections: &[f64],
    sum: f64,
    depth: usize,
    tolerance: f64,
) {
    // sum can drift slightly above or below one
    if sum > 1.0 + tolerance {
        return;
    }

    if depth == ref_dir.len() {
        if 1.0 - sum < tolerance {
            ref_dirs.push(ref_dir.to_vec());
        }
    } else {
        for &section in sections {
            ref_dir[depth] = section;
            das_dennis_recursion(ref_dirs, ref_dir, sections, sum + section, depth + 1, tolerance);
        }
    }
}
