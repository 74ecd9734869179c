use crate::math::{Point, Real, Rotation, Vector, DEFAULT_EPSILON};
use na::Rotation3;

/// The sensor orientation at `eye` looking toward `target`.
///
/// The local `+Z` axis points toward `target`. The local `+Y` axis is the
/// normalized cross product of `+Z` and `reference`, flipped if needed so that
/// it never points upward (its world `z` is non-positive). The local `+X` axis
/// completes the right-handed frame.
///
/// Returns `None` if `eye` and `target` coincide, or if `reference` is parallel
/// to the viewing direction.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::sampling::look_at;
/// use nalgebra::{Point3, Vector3};
///
/// let eye = Point3::new(2.0, 0.0, 1.0);
/// let target = Point3::new(0.0, 0.0, 1.0);
/// let rot = look_at(&eye, &target, &Vector3::y()).unwrap();
///
/// assert!((rot * Vector3::z() - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1.0e-6);
/// assert!((rot * Vector3::y()).z <= 0.0);
/// # }
/// ```
pub fn look_at(
    eye: &Point<Real>,
    target: &Point<Real>,
    reference: &Vector<Real>,
) -> Option<Rotation<Real>> {
    let z = (target - eye).try_normalize(DEFAULT_EPSILON)?;
    let mut y = z.cross(reference).try_normalize(DEFAULT_EPSILON)?;

    if y.z > 0.0 {
        y = -y;
    }

    let x = y.cross(&z);
    let basis = Rotation3::from_basis_unchecked(&[x, y, z]);

    Some(Rotation::from_rotation_matrix(&basis))
}
