use crate::math::{Real, Vector};

/// Error returned by the `validate` methods of the primitives.
///
/// Every geometric test of this crate accepts any input and never fails. A
/// primitive with a negative radius, a negative extent, a zero normal or a
/// non-finite coordinate still yields a definite (but unspecified) answer.
/// Validation is opt-in for hosts that want to reject such values early.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidPrimitive {
    /// A bounding sphere has a negative radius.
    #[error("the radius of a bounding sphere must be non-negative")]
    NegativeRadius,
    /// A box has at least one negative half-extent.
    #[error("the half-extents of a box must be non-negative")]
    NegativeExtents,
    /// A coordinate, radius or offset is NaN or infinite.
    #[error("the primitive contains a NaN or infinite value")]
    NonFinite,
    /// A plane normal has a zero length.
    #[error("the normal of a plane must not be zero")]
    ZeroNormal,
    /// A ray direction has a zero length.
    #[error("the direction of a ray must not be zero")]
    ZeroDirection,
}

/// Checks that every coordinate of the given vectors and every scalar is finite.
pub(crate) fn check_finite<'a>(
    vectors: impl IntoIterator<Item = &'a Vector<Real>>,
    scalars: &[Real],
) -> Result<(), InvalidPrimitive> {
    let vectors_finite = vectors
        .into_iter()
        .all(|v| v.iter().all(|x| x.is_finite()));

    if vectors_finite && scalars.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(InvalidPrimitive::NonFinite)
    }
}
