use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// When edge- and corner-diagonal steps are permitted relative to the
/// obstacles around them.
///
/// Face steps are always candidates. A diagonal step is admitted depending
/// on how many of its *contributors* (the lower-order steps obtained by
/// zeroing some of its components) are blocked:
///
/// | Policy | blocked contributors tolerated |
/// |---|---|
/// | `Never` | no diagonals at all |
/// | `OnlyWhenNoObstacle` | 0 |
/// | `IfAtMostOneObstacle` | 1 (of 2 for an edge, of 6 for a corner) |
/// | `Always` | any |
///
/// The destination itself must be walkable under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DiagonalMovement {
    #[default]
    Never,
    OnlyWhenNoObstacle,
    IfAtMostOneObstacle,
    Always,
}

impl DiagonalMovement {
    pub const ALL: [Self; 4] = [
        Self::Never,
        Self::OnlyWhenNoObstacle,
        Self::IfAtMostOneObstacle,
        Self::Always,
    ];

    /// The snake_case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::OnlyWhenNoObstacle => "only_when_no_obstacle",
            Self::IfAtMostOneObstacle => "if_at_most_one_obstacle",
            Self::Always => "always",
        }
    }

    /// Highest step order this policy can produce.
    #[inline]
    pub fn max_order(self) -> u8 {
        match self {
            Self::Never => 1,
            _ => 3,
        }
    }

    /// Whether a diagonal step with `blocked` non-open contributors is
    /// admitted.
    #[inline]
    pub fn admits(self, blocked: usize) -> bool {
        match self {
            Self::Never => false,
            Self::OnlyWhenNoObstacle => blocked == 0,
            Self::IfAtMostOneObstacle => blocked <= 1,
            Self::Always => true,
        }
    }
}

impl fmt::Display for DiagonalMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagonalMovement {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| GridError::UnknownMovement(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for m in DiagonalMovement::ALL {
            assert_eq!(m.to_string().parse::<DiagonalMovement>(), Ok(m));
        }
        assert_eq!(
            "sometimes".parse::<DiagonalMovement>(),
            Err(GridError::UnknownMovement("sometimes".into()))
        );
    }

    #[test]
    fn default_is_never() {
        assert_eq!(DiagonalMovement::default(), DiagonalMovement::Never);
    }

    #[test]
    fn tolerance_per_policy() {
        use DiagonalMovement::*;
        for blocked in 0..=6 {
            assert!(!Never.admits(blocked));
            assert!(Always.admits(blocked));
            assert_eq!(OnlyWhenNoObstacle.admits(blocked), blocked == 0);
            assert_eq!(IfAtMostOneObstacle.admits(blocked), blocked <= 1);
        }
    }
}
