use crate::error::{Error, Result};

/// Seed set for incremental refinement: two interior points followed by the
/// unit basis. The interior points are two-dimensional, so only `n_obj == 2`
/// is accepted.
pub fn boundary_points(n_obj: usize) -> Result<Vec<Vec<f64>>>
{
    if n_obj != 2
    {
        return Err(Error::DimensionMismatch {
            expected: 2,
            actual: n_obj,
        });
    }

    let mut ref_points = vec![vec![0.2, 0.4], vec![0.8, 0.4]];

    ref_points.extend((0..n_obj).map(|axis| {
        let mut extreme_point = vec![0.0; n_obj];
        extreme_point[axis] = 1.0;
        extreme_point
    }));

    Ok(ref_points)
}
