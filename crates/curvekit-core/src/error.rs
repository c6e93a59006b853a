use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Invalid construction arguments.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Parameter outside the evaluable domain, or no geometry to evaluate.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Out-of-range knot or control-point index.
    #[error("Index error: {0}")]
    Index(String),
}

impl CurveError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
