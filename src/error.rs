use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    MissingField {
        field: &'static str
    },
    #[error("points must be a number between {min} and {max}, got {points}", min = crate::chart::MIN_POINTS, max = crate::chart::MAX_POINTS)]
    PointsOutOfRange {
        points: usize
    },
    #[error("share code {code:?} must look like seed1-seed2-correlationId")]
    MalformedShareCode {
        code: String
    },
    #[error("a survey needs at least one pairing")]
    NoPairings,
    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch {
        left: usize,
        right: usize
    },
    #[error("at least 2 points are needed for correlation statistics, got {n}")]
    TooFewPoints {
        n: usize
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
