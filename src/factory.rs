#[cfg(test)]
mod tests;

use dyn_clone::DynClone;
use crate::config::ReferenceDirectionsConfig;
use crate::error::Result;
use crate::reference_directions::ReferenceDirections;

/// Describes which reference directions an optimizer should use,
/// without building them up front.
pub trait ReferenceDirectionsFactory: DynClone + Send + Sync {
    fn name(&self) -> &str;
    fn n_obj(&self) -> usize;
    fn generate(&self, config: &ReferenceDirectionsConfig) -> Result<ReferenceDirections>;
}

dyn_clone::clone_trait_object!(ReferenceDirectionsFactory);

#[derive(Clone)]
pub struct DasDennis
{
    name: String,
    n_obj: usize,
    n_sections: usize
}

impl DasDennis {
    pub fn new(n_obj: usize, n_sections: usize) -> Self
    {
        DasDennis {
            name: format!("Das-Dennis ({} {})", n_obj, n_sections),
            n_obj,
            n_sections
        }
    }
}

impl ReferenceDirectionsFactory for DasDennis
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn n_obj(&self) -> usize {
        self.n_obj
    }

    fn generate(&self, config: &ReferenceDirectionsConfig) -> Result<ReferenceDirections> {
        ReferenceDirections::from_sections_with(self.n_obj, self.n_sections, config)
    }
}

#[derive(Clone)]
pub struct DasDennisByCount
{
    name: String,
    n_obj: usize,
    n_refs: usize
}

impl DasDennisByCount {
    pub fn new(n_obj: usize, n_refs: usize) -> Self
    {
        DasDennisByCount {
            name: format!("Das-Dennis ({} ~{})", n_obj, n_refs),
            n_obj,
            n_refs
        }
    }
}

impl ReferenceDirectionsFactory for DasDennisByCount
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn n_obj(&self) -> usize {
        self.n_obj
    }

    fn generate(&self, config: &ReferenceDirectionsConfig) -> Result<ReferenceDirections> {
        ReferenceDirections::from_count_with(self.n_obj, self.n_refs, config)
    }
}

#[derive(Clone)]
pub struct BoundaryPoints
{
    n_obj: usize
}

impl BoundaryPoints {
    pub fn new(n_obj: usize) -> Self
    {
        BoundaryPoints {
            n_obj
        }
    }
}

impl ReferenceDirectionsFactory for BoundaryPoints
{
    fn name(&self) -> &str {
        "Boundary points"
    }

    fn n_obj(&self) -> usize {
        self.n_obj
    }

    fn generate(&self, _config: &ReferenceDirectionsConfig) -> Result<ReferenceDirections> {
        ReferenceDirections::boundary(self.n_obj)
    }
}
