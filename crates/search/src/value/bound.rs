use gambit_core::Utility;
use std::cmp::Ordering;

/// A minimax value: a finite utility or one of two unreachable extremes.
///
/// The infinities sit strictly outside every finite value, so no payoff a
/// game returns can ever collide with the sentinels that open a search.
///
/// Ordering is total: `NegInfinity < Finite(_) < PosInfinity`, and finite
/// values compare with [`f32::total_cmp`].
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub enum Bound {
    NegInfinity,
    Finite(Utility),
    PosInfinity,
}

impl Bound {
    /// The finite utility, if any.
    pub fn finite(&self) -> Option<Utility> {
        match self {
            Self::Finite(u) => Some(*u),
            _ => None,
        }
    }
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }
    fn rank(&self) -> u8 {
        match self {
            Self::NegInfinity => 0,
            Self::Finite(_) => 1,
            Self::PosInfinity => 2,
        }
    }
}

impl From<Utility> for Bound {
    fn from(utility: Utility) -> Self {
        Self::Finite(utility)
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Bound {}
impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegInfinity => write!(f, "-inf"),
            Self::Finite(u) => write!(f, "{}", u),
            Self::PosInfinity => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_enclose_finite_extremes() {
        for u in [Utility::MIN, -1e30, 0., 1e30, Utility::MAX] {
            assert!(Bound::NegInfinity < Bound::from(u));
            assert!(Bound::from(u) < Bound::PosInfinity);
        }
        assert!(Bound::from(Utility::NEG_INFINITY) > Bound::NegInfinity);
        assert!(Bound::from(Utility::INFINITY) < Bound::PosInfinity);
    }

    #[test]
    fn finite_values_order_numerically() {
        assert!(Bound::from(-5.) < Bound::from(10.));
        assert_eq!(Bound::from(2.5), Bound::from(2.5));
        assert_eq!(Bound::from(-5.).max(Bound::from(10.)), Bound::from(10.));
    }

    #[test]
    fn sentinels_equal_themselves() {
        assert_eq!(Bound::NegInfinity, Bound::NegInfinity);
        assert_eq!(Bound::PosInfinity, Bound::PosInfinity);
        assert_ne!(Bound::NegInfinity, Bound::PosInfinity);
    }

    #[test]
    fn renders() {
        assert_eq!(Bound::NegInfinity.to_string(), "-inf");
        assert_eq!(Bound::PosInfinity.to_string(), "+inf");
        assert_eq!(Bound::from(10.).to_string(), "10");
        assert_eq!(Bound::from(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn finite_accessor() {
        assert_eq!(Bound::from(7.).finite(), Some(7.));
        assert_eq!(Bound::PosInfinity.finite(), None);
        assert!(!Bound::NegInfinity.is_finite());
    }
}
