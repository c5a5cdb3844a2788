//! Rule kinds.
//!
//! Every rule in the Beman Standard is either a mandatory
//! [`CheckKind::Requirement`] or an advisory [`CheckKind::Recommendation`].

use std::str::FromStr;

use serde::Deserialize;

use crate::error::TidyError;

/// Classification of a rule in the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CheckKind {
    /// Mandatory rule; failure always affects the exit status.
    Requirement,
    /// Advisory rule; failure affects the exit status only under require-all.
    Recommendation,
}

impl CheckKind {
    /// Both kinds, in reporting order.
    pub const ALL: [CheckKind; 2] = [CheckKind::Requirement, CheckKind::Recommendation];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Requirement => "REQUIREMENT",
            CheckKind::Recommendation => "RECOMMENDATION",
        }
    }

    /// Log severity used by checks of this kind.
    pub fn log_level(&self) -> &'static str {
        match self {
            CheckKind::Requirement => "ERROR",
            CheckKind::Recommendation => "WARNING",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUIREMENT" => Ok(Self::Requirement),
            "RECOMMENDATION" => Ok(Self::Recommendation),
            _ => Err(TidyError::InvalidKind {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CheckKind {
    type Error = TidyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_kinds() {
        assert_eq!(
            "REQUIREMENT".parse::<CheckKind>().unwrap(),
            CheckKind::Requirement
        );
        assert_eq!(
            "RECOMMENDATION".parse::<CheckKind>().unwrap(),
            CheckKind::Recommendation
        );
    }

    #[test]
    fn rejects_misspelled_kind() {
        let err = "RECOMMANDATION".parse::<CheckKind>().unwrap_err();
        assert!(matches!(err, TidyError::InvalidKind { .. }));
    }

    #[test]
    fn rejects_lowercase_kind() {
        assert!("requirement".parse::<CheckKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in CheckKind::ALL {
            assert_eq!(kind.to_string().parse::<CheckKind>().unwrap(), kind);
        }
    }

    #[test]
    fn log_level_follows_kind() {
        assert_eq!(CheckKind::Requirement.log_level(), "ERROR");
        assert_eq!(CheckKind::Recommendation.log_level(), "WARNING");
    }

    #[test]
    fn deserializes_from_yaml() {
        let kind: CheckKind = serde_yaml::from_str("RECOMMENDATION").unwrap();
        assert_eq!(kind, CheckKind::Recommendation);
        assert!(serde_yaml::from_str::<CheckKind>("MAYBE").is_err());
    }
}
