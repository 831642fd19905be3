use thiserror::Error;

/// Top-level error type of the crate.
#[derive(Debug, Error)]
pub enum HexfoilError {
    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed aerofoil data at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Errors raised while building or combining aerofoil sections.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("aerofoil section needs at least 4 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("section point counts differ: {left} vs {right}")]
    PointCountMismatch { left: usize, right: usize },
}

/// Errors raised by the mesh generation operations.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`HexfoilError`].
pub type Result<T> = std::result::Result<T, HexfoilError>;
