use thiserror::Error;

/// Construction-time failures. Per-tick updates never fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("body mass must be positive, got {0}")]
    InvalidMass(f64),

    #[error("animation has no frames")]
    EmptyAnimation,

    #[error("animation frame delay must be at least one tick")]
    ZeroFrameDelay,

    #[error("image `{0}` is not listed in the asset manifest")]
    UnknownImage(String),

    #[error("image `{path}` has invalid size {width}x{height}")]
    InvalidImageSize { path: String, width: f64, height: f64 },

    #[error("failed to parse asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
