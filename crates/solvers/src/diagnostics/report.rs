use std::fmt;

/// Outcome of [`is_workable`](super::is_workable).
///
/// `workable` holds exactly when the function is continuous on the interval,
/// the endpoint values have opposite signs, and one sign change was counted.
///
/// The default report is [unchecked](WorkabilityReport::unchecked): every
/// field is false or zero because there was no function to check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkabilityReport {
    /// False when no check ran.
    pub checked: bool,
    pub continuous: bool,
    pub unequal_signs: bool,
    pub num_roots: usize,
    pub workable: bool,

    /// First sample that failed the continuity test, if any.
    pub discontinuity: Option<f64>,
}

/// Why a [`WorkabilityReport`] is not workable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    /// There was no function to check.
    Unchecked,
    /// The continuity test failed, at the given sample when known.
    Discontinuity { at: Option<f64> },
    /// `f(a)` and `f(b)` do not have strictly opposite signs.
    EqualSigns,
    NoRoots,
    MultipleRoots { count: usize },
}

impl WorkabilityReport {
    /// Builds a report from the individual check results.
    #[must_use]
    pub fn new(discontinuity: Option<f64>, unequal_signs: bool, num_roots: usize) -> Self {
        let continuous = discontinuity.is_none();
        Self {
            checked: true,
            continuous,
            unequal_signs,
            num_roots,
            workable: continuous && unequal_signs && num_roots == 1,
            discontinuity,
        }
    }

    /// Returns the not-workable report used when there is nothing to check.
    #[must_use]
    pub fn unchecked() -> Self {
        Self::default()
    }

    /// Lists every reason the report is not workable, in check order.
    ///
    /// Empty for a workable report. An unchecked report has the single
    /// reason [`Reason::Unchecked`].
    #[must_use]
    pub fn reasons(&self) -> Vec<Reason> {
        if !self.checked {
            return vec![Reason::Unchecked];
        }

        let mut reasons = Vec::new();
        if !self.continuous {
            reasons.push(Reason::Discontinuity {
                at: self.discontinuity,
            });
        }
        if !self.unequal_signs {
            reasons.push(Reason::EqualSigns);
        }
        match self.num_roots {
            0 => reasons.push(Reason::NoRoots),
            1 => {}
            count => reasons.push(Reason::MultipleRoots { count }),
        }
        reasons
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => f.write_str("no function to check"),
            Self::Discontinuity { at: Some(x) } => write!(f, "discontinuity at x = {x}"),
            Self::Discontinuity { at: None } => f.write_str("not continuous on the interval"),
            Self::EqualSigns => f.write_str("f(a) and f(b) do not have opposite signs"),
            Self::NoRoots => f.write_str("no sign change on the interval"),
            Self::MultipleRoots { count } => {
                write!(f, "more than one root on the interval ({count} sign changes)")
            }
        }
    }
}
