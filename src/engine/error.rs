use thiserror::Error;

/// Failures of a single click-handling invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    /// The click event carried coordinates that cannot place a marker
    #[error("Invalid click coordinates ({x}, {y})")]
    InvalidClick { x: f64, y: f64 },

    /// The mount surface was torn down and no longer accepts markers
    #[error("Marker surface is detached")]
    SurfaceDetached,
}
