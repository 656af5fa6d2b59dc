/// Outcome of running the escape-time iteration for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    /// The orbit left the escape radius after this many steps.
    Escaped(u32),
    /// The orbit stayed bounded for the whole iteration cap; treated as inside the set.
    Bounded,
}

impl EscapeTime {
    /// Integer value reported for points that never escaped.
    pub const BOUNDED_SENTINEL: i32 = -1;

    #[must_use]
    pub fn iterations(self) -> Option<u32> {
        match self {
            Self::Escaped(iterations) => Some(iterations),
            Self::Bounded => None,
        }
    }

    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }

    /// Flattens to the integer form: the step count, or `-1` when bounded.
    #[must_use]
    pub fn to_sentinel(self) -> i32 {
        match self {
            Self::Escaped(iterations) => i32::try_from(iterations).unwrap_or(i32::MAX),
            Self::Bounded => Self::BOUNDED_SENTINEL,
        }
    }
}

impl From<EscapeTime> for i32 {
    fn from(escape_time: EscapeTime) -> Self {
        escape_time.to_sentinel()
    }
}
