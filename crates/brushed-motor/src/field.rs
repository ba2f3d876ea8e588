//! Magnetic field sources.

use nalgebra::Vector3;

/// A source of magnetic field direction.
///
/// An implementation reports the unit field direction at the armature; the
/// integrator applies the configured field strength. The uniform
/// permanent-magnet field is the only implementation today;
/// spatially-varying sources fit the same seam.
pub trait MagneticField: Send + Sync {
    /// Unit vector giving the field direction at the armature.
    fn direction(&self) -> Vector3<f64>;
}

/// Stationary permanent magnet.
///
/// Produces a uniform field pointing from the north pole above the armature
/// straight down to the south pole below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermanentMagnet;

impl MagneticField for PermanentMagnet {
    fn direction(&self) -> Vector3<f64> {
        Vector3::new(0.0, -1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn permanent_magnet_points_down() {
        let field = PermanentMagnet.direction();
        assert_relative_eq!(field.x, 0.0);
        assert_relative_eq!(field.y, -1.0);
        assert_relative_eq!(field.z, 0.0);
    }

    #[test]
    fn permanent_magnet_direction_is_unit() {
        assert_relative_eq!(PermanentMagnet.direction().norm(), 1.0);
    }

    #[test]
    fn usable_as_trait_object() {
        let field: Box<dyn MagneticField> = Box::new(PermanentMagnet);
        assert_relative_eq!(field.direction().y, -1.0);
    }
}
