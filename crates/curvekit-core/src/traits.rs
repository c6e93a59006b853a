use crate::error::Result;

/// Validate the structural invariants of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
