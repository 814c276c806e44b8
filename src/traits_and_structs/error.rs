use thiserror::Error;

/// Everything that can go wrong while configuring, seeding or painting a banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BannerError {
    /// A setter received a size that is not a positive integer or a color it
    /// could not parse. The previous value is kept.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A seed pattern whose shape differs from the grid's.
    #[error("pattern is {found:?} (width, height) but the grid is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("tick called before any text was rendered")]
    NotSeeded,

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, BannerError>;
