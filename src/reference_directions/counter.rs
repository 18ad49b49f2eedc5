use crate::error::{Error, Result};

/// Number of lattice points for `n_obj` objectives and `n_sections` subdivisions.
///
/// Stars and bars: `C(n_obj + n_sections - 1, n_sections)`.
pub fn count_directions(n_obj: usize, n_sections: usize) -> Result<usize>
{
    if n_obj == 0
    {
        return Err(Error::InvalidArgument("n_obj must be positive".to_string()));
    }

    n_obj
        .checked_add(n_sections)
        .map(|n| n - 1)
        .and_then(|n| binomial(n, n_sections))
        .ok_or(Error::CountOverflow { n_obj, n_sections })
}

/// Same as [`count_directions`] for a valid `n_obj`, but saturates at `usize::MAX`
pub(crate) fn saturating_count_directions(n_obj: usize, n_sections: usize) -> usize
{
    count_directions(n_obj, n_sections).unwrap_or(usize::MAX)
}

fn binomial(n: usize, k: usize) -> Option<usize>
{
    if k > n
    {
        return Some(0);
    }

    let k = k.min(n - k) as u128;
    let base = n as u128 - k;

    // After step i the accumulator holds C(base + i, i), so each division is exact
    let mut result: u128 = 1;
    for i in 1..=k
    {
        result = result.checked_mul(base + i)? / i;
    }

    usize::try_from(result).ok()
}
