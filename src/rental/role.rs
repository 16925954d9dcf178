//! Acting role, resolved by the host before calling the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission lens through which a transition is evaluated.
///
/// `Viewer` is deny-all. Any role string the host cannot map lands on
/// `Viewer` through [`ActorRole::from_str_lossy`], so an unrecognized role
/// can never be granted options.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Owner,
    Renter,
    Admin,
    Viewer,
}

impl ActorRole {
    pub const ALL: [ActorRole; 4] = [
        ActorRole::Owner,
        ActorRole::Renter,
        ActorRole::Admin,
        ActorRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Renter => "renter",
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }

    /// Map a raw role string, falling back to `Viewer`.
    ///
    /// ```rust
    /// use rentflow::rental::ActorRole;
    ///
    /// assert_eq!(ActorRole::from_str_lossy("Owner"), ActorRole::Owner);
    /// assert_eq!(ActorRole::from_str_lossy("superuser"), ActorRole::Viewer);
    /// ```
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner" => Self::Owner,
            "renter" => Self::Renter,
            "admin" => Self::Admin,
            _ => Self::Viewer,
        }
    }

    /// Roles that take part in the rental (everyone but `Viewer`).
    pub fn is_participant(&self) -> bool {
        !matches!(self, Self::Viewer)
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_parse_maps_known_roles() {
        for role in ActorRole::ALL {
            assert_eq!(ActorRole::from_str_lossy(role.as_str()), role);
        }
        assert_eq!(ActorRole::from_str_lossy("  ADMIN "), ActorRole::Admin);
    }

    #[test]
    fn lossy_parse_denies_unknown_roles() {
        assert_eq!(ActorRole::from_str_lossy(""), ActorRole::Viewer);
        assert_eq!(ActorRole::from_str_lossy("company"), ActorRole::Viewer);
        assert!(!ActorRole::from_str_lossy("root").is_participant());
    }
}
