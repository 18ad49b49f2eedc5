use peeking_take_while::PeekableExt;
use tracing::{debug, warn};
use crate::config::ReferenceDirectionsConfig;
use crate::error::{Error, Result};
use crate::reference_directions::counter::saturating_count_directions;
use crate::reference_directions::lattice::enumerate_directions_with;

/// Directions for roughly `n_refs` points, searching resolutions below
/// [`crate::config::DEFAULT_MAX_SECTIONS`].
pub fn directions_for_count(n_obj: usize, n_refs: usize) -> Result<Vec<Vec<f64>>>
{
    directions_for_count_with(n_obj, n_refs, &ReferenceDirectionsConfig::default())
}

/// Enumerates the lattice one resolution below the first one that reaches `n_refs`.
///
/// The returned set is therefore the largest lattice with strictly fewer than
/// `n_refs` directions. When even resolution 0 reaches the target
/// (`n_refs <= 1`) the resolution is clamped to 0.
pub fn directions_for_count_with(n_obj: usize, n_refs: usize, config: &ReferenceDirectionsConfig) -> Result<Vec<Vec<f64>>>
{
    let n_sections = resolution_for_count(n_obj, n_refs, config)?;

    enumerate_directions_with(n_obj, n_sections, config)
}

/// Resolution that [`directions_for_count_with`] enumerates
pub fn resolution_for_count(n_obj: usize, n_refs: usize, config: &ReferenceDirectionsConfig) -> Result<usize>
{
    config.validate()?;

    if n_obj == 0
    {
        return Err(Error::InvalidArgument("n_obj must be positive".to_string()));
    }

    // counts never decrease with the resolution
    let mut counts = (0..config.max_sections)
        .map(|n_sections| saturating_count_directions(n_obj, n_sections))
        .peekable();

    let first_reaching = counts
        .peeking_take_while(|count| *count < n_refs)
        .count();

    if counts.peek().is_none()
    {
        warn!(n_obj, n_refs, max_sections = config.max_sections, "no resolution reaches requested directions count");

        return Err(Error::ResolutionNotFound {
            n_obj,
            n_refs,
            max_sections: config.max_sections,
        });
    }

    let n_sections = first_reaching.saturating_sub(1);

    debug!(n_obj, n_refs, n_sections, "resolution selected");

    Ok(n_sections)
}
