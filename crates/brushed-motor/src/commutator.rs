//! Split-ring commutator and brush pair.

use std::f64::consts::FRAC_PI_2;

use brushed_core::types::Polarity;

/// Wrapped angle of the first ring-gap crossing.
const GAP_LOW: f64 = FRAC_PI_2;
/// Wrapped angle of the second ring-gap crossing.
const GAP_HIGH: f64 = 3.0 * FRAC_PI_2;

// ---------------------------------------------------------------------------
// ContactPolarities
// ---------------------------------------------------------------------------

/// Polarity each commutator contact currently reads from the brushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactPolarities {
    /// Polarity of the top half-ring contact.
    pub top: Polarity,
    /// Polarity of the bottom half-ring contact.
    pub bottom: Polarity,
}

impl ContactPolarities {
    /// Both contacts floating: no current path through the coil.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            top: Polarity::Neutral,
            bottom: Polarity::Neutral,
        }
    }

    /// Whether the circuit is open (either contact floating breaks it).
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.top.is_neutral() || self.bottom.is_neutral()
    }
}

// ---------------------------------------------------------------------------
// CommutatorPair
// ---------------------------------------------------------------------------

/// The two brushes and the split-ring contacts they ride on.
///
/// Brush polarity is fixed for the life of the simulation; contact polarity
/// is re-derived from the rotor angle every tick, with no state retained
/// between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommutatorPair {
    /// Polarity delivered by the top brush.
    pub top_brush: Polarity,
    /// Polarity delivered by the bottom brush.
    pub bottom_brush: Polarity,
}

impl Default for CommutatorPair {
    fn default() -> Self {
        Self {
            top_brush: Polarity::Positive,
            bottom_brush: Polarity::Negative,
        }
    }
}

impl CommutatorPair {
    /// Contact polarities at the given wrapped angle.
    ///
    /// The half-turn between π/2 and 3π/2 swaps which brush feeds which
    /// contact. Exactly at the crossings the brushes bridge the ring gap
    /// and both contacts float; this dead zone is deliberate, not a
    /// rounding artifact. Zero supply voltage also opens the circuit
    /// regardless of angle.
    #[must_use]
    #[allow(clippy::float_cmp)] // the dead zone is defined at exactly π/2 and 3π/2
    pub fn contacts(&self, angle: f64, battery_voltage: f64) -> ContactPolarities {
        if battery_voltage == 0.0 {
            return ContactPolarities::neutral();
        }
        if angle == GAP_LOW || angle == GAP_HIGH {
            return ContactPolarities::neutral();
        }
        if angle < GAP_LOW || angle > GAP_HIGH {
            ContactPolarities {
                top: self.top_brush,
                bottom: self.bottom_brush,
            }
        } else {
            ContactPolarities {
                top: self.bottom_brush,
                bottom: self.top_brush,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    const VOLTS: f64 = 10.0;

    #[test]
    fn first_quadrant_matches_brush_assignment() {
        let pair = CommutatorPair::default();
        let contacts = pair.contacts(FRAC_PI_4, VOLTS);
        assert_eq!(contacts.top, Polarity::Positive);
        assert_eq!(contacts.bottom, Polarity::Negative);
    }

    #[test]
    fn fourth_quadrant_matches_brush_assignment() {
        let pair = CommutatorPair::default();
        let contacts = pair.contacts(7.0 * FRAC_PI_4, VOLTS);
        assert_eq!(contacts.top, Polarity::Positive);
        assert_eq!(contacts.bottom, Polarity::Negative);
    }

    #[test]
    fn back_half_swaps_assignment() {
        let pair = CommutatorPair::default();
        for angle in [FRAC_PI_2 + 0.01, PI, 3.0 * FRAC_PI_2 - 0.01] {
            let contacts = pair.contacts(angle, VOLTS);
            assert_eq!(contacts.top, Polarity::Negative, "angle {angle}");
            assert_eq!(contacts.bottom, Polarity::Positive, "angle {angle}");
        }
    }

    #[test]
    fn dead_zone_at_both_crossings() {
        let pair = CommutatorPair::default();
        for angle in [FRAC_PI_2, 3.0 * FRAC_PI_2] {
            let contacts = pair.contacts(angle, VOLTS);
            assert_eq!(contacts, ContactPolarities::neutral(), "angle {angle}");
        }
    }

    #[test]
    fn just_off_the_dead_zone_is_live() {
        let pair = CommutatorPair::default();
        assert!(!pair.contacts(FRAC_PI_2 - 1e-9, VOLTS).is_open());
        assert!(!pair.contacts(FRAC_PI_2 + 1e-9, VOLTS).is_open());
    }

    #[test]
    fn zero_voltage_forces_neutral_everywhere() {
        let pair = CommutatorPair::default();
        for i in 0..8 {
            let angle = f64::from(i) * FRAC_PI_4;
            assert_eq!(pair.contacts(angle, 0.0), ContactPolarities::neutral());
        }
    }

    #[test]
    fn custom_brush_assignment_is_respected() {
        let pair = CommutatorPair {
            top_brush: Polarity::Negative,
            bottom_brush: Polarity::Positive,
        };
        let contacts = pair.contacts(0.0, VOLTS);
        assert_eq!(contacts.top, Polarity::Negative);
        assert_eq!(contacts.bottom, Polarity::Positive);

        let swapped = pair.contacts(PI, VOLTS);
        assert_eq!(swapped.top, Polarity::Positive);
        assert_eq!(swapped.bottom, Polarity::Negative);
    }

    #[test]
    fn is_open_when_either_contact_floats() {
        assert!(ContactPolarities::neutral().is_open());
        assert!(ContactPolarities {
            top: Polarity::Positive,
            bottom: Polarity::Neutral,
        }
        .is_open());
        assert!(!ContactPolarities {
            top: Polarity::Positive,
            bottom: Polarity::Negative,
        }
        .is_open());
    }
}
