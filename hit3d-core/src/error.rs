use thiserror::Error;

/// Errors produced by degenerate geometric inputs.
///
/// The kernel surfaces each documented degenerate case as a value instead of
/// aborting or silently emitting `inf`/`NaN`. Ordinary IEEE arithmetic outside
/// these sites keeps standard `f32` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Matrix determinant is exactly zero; no inverse exists.
    #[error("singular matrix: determinant is zero")]
    SingularMatrix,
    /// Tried to project onto a zero-length vector.
    #[error("cannot project onto a zero-length vector")]
    ZeroLengthProjection,
    /// Homogeneous divide hit `w == 0`, the point has no Cartesian image.
    #[error("degenerate homogeneous coordinate: w is zero")]
    DegenerateW,
}
