//! Franchise identity resolution across renames and platform changes.
//!
//! Raw ids come from three sources: synthetic `historical-*` placeholders for
//! members who predate the digital record, the legacy platform, and the
//! current platform. Each resolves to one stable primary id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{LeagueError, Result};


/// Which platform era a legacy id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Historical,
    Legacy,
    Current,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyId {
    pub id: String,
    pub era: Era,
}

/// The stable entity behind one league member's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseIdentity {
    pub primary_id: String,
    #[serde(default)]
    pub legacy_ids: Vec<LegacyId>,
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default = "default_active", alias = "active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Outcome of resolving a raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The raw id is itself a known primary id
    Primary(&'a str),
    /// The raw id was found in the legacy table
    Legacy(&'a str),
    /// Unknown id; treated as its own primary identity
    Unresolved(&'a str),
}

impl<'a> Resolution<'a> {
    pub fn primary_id(&self) -> &'a str {
        match self {
            Resolution::Primary(id) | Resolution::Legacy(id) | Resolution::Unresolved(id) => id,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved(_))
    }
}

/// Lookup tables built once from the franchise roster.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    franchises: HashMap<String, FranchiseIdentity>,
    legacy: HashMap<String, String>,
}

impl IdentityResolver {
    /// Build a resolver, rejecting roster tables whose ids collide.
    pub fn new(identities: Vec<FranchiseIdentity>) -> Result<Self> {
        let mut resolver = Self::default();

        for identity in &identities {
            if resolver.franchises.contains_key(&identity.primary_id) {
                return Err(LeagueError::InvalidRoster {
                    message: format!("duplicate primary id '{}'", identity.primary_id),
                });
            }
            resolver
                .franchises
                .insert(identity.primary_id.clone(), identity.clone());
        }

        for identity in &identities {
            let mut seen_eras = Vec::new();
            for legacy in &identity.legacy_ids {
                if seen_eras.contains(&legacy.era) {
                    return Err(LeagueError::InvalidRoster {
                        message: format!(
                            "franchise '{}' has more than one {:?} legacy id",
                            identity.primary_id, legacy.era
                        ),
                    });
                }
                seen_eras.push(legacy.era);
                resolver.insert_legacy(&identity.primary_id, &legacy.id)?;
            }
        }

        Ok(resolver)
    }

    fn insert_legacy(&mut self, primary_id: &str, legacy_id: &str) -> Result<()> {
        if legacy_id == primary_id {
            return Ok(());
        }
        if self.franchises.contains_key(legacy_id) {
            return Err(LeagueError::InvalidRoster {
                message: format!(
                    "legacy id '{}' of '{}' is another franchise's primary id",
                    legacy_id, primary_id
                ),
            });
        }
        match self.legacy.get(legacy_id) {
            Some(existing) if existing != primary_id => Err(LeagueError::InvalidRoster {
                message: format!(
                    "legacy id '{}' is claimed by both '{}' and '{}'",
                    legacy_id, existing, primary_id
                ),
            }),
            _ => {
                self.legacy
                    .insert(legacy_id.to_string(), primary_id.to_string());
                Ok(())
            }
        }
    }

    /// Map a raw platform id to its primary id.
    ///
    /// Unknown ids fail open: they come back unchanged, flagged as unresolved.
    pub fn resolve<'a>(&'a self, raw_id: &'a str) -> Resolution<'a> {
        if let Some((primary, _)) = self.franchises.get_key_value(raw_id) {
            return Resolution::Primary(primary.as_str());
        }
        if let Some(primary) = self.legacy.get(raw_id) {
            return Resolution::Legacy(primary.as_str());
        }
        Resolution::Unresolved(raw_id)
    }

    /// Name to show for a franchise in a season-specific view.
    ///
    /// Active franchises always show their current name. Retired franchises
    /// keep the name they used that season.
    pub fn display_name(&self, primary_id: &str, season_name: Option<&str>) -> String {
        match self.franchises.get(primary_id) {
            Some(identity) if identity.is_active => identity.display_name.clone(),
            Some(identity) => season_name
                .map(str::to_string)
                .unwrap_or_else(|| identity.display_name.clone()),
            None => season_name.unwrap_or(primary_id).to_string(),
        }
    }

    pub fn identity(&self, primary_id: &str) -> Option<&FranchiseIdentity> {
        self.franchises.get(primary_id)
    }

    pub fn identities(&self) -> impl Iterator<Item = &FranchiseIdentity> {
        self.franchises.values()
    }

    pub fn len(&self) -> usize {
        self.franchises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.franchises.is_empty()
    }

    /// Record a display name seen in a new season. Returns false for unknown ids.
    pub fn observe(&mut self, primary_id: &str, display_name: &str) -> bool {
        match self.franchises.get_mut(primary_id) {
            Some(identity) => {
                if identity.display_name != display_name {
                    identity.display_name = display_name.to_string();
                }
                true
            }
            None => false,
        }
    }

    /// Attach a new platform id to a known franchise.
    pub fn add_legacy_id(&mut self, primary_id: &str, legacy: LegacyId) -> Result<()> {
        let Some(identity) = self.franchises.get(primary_id) else {
            return Err(LeagueError::InvalidRoster {
                message: format!("unknown franchise '{}'", primary_id),
            });
        };
        if identity
            .legacy_ids
            .iter()
            .any(|existing| existing.era == legacy.era && existing.id != legacy.id)
        {
            return Err(LeagueError::InvalidRoster {
                message: format!(
                    "franchise '{}' already has a {:?} legacy id",
                    primary_id, legacy.era
                ),
            });
        }

        self.insert_legacy(primary_id, &legacy.id)?;
        if let Some(identity) = self.franchises.get_mut(primary_id) {
            if !identity.legacy_ids.contains(&legacy) {
                identity.legacy_ids.push(legacy);
            }
        }
        Ok(())
    }
}
