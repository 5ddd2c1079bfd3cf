//! Credential records returned by the credential-lookup collaborator.
//!
//! The source app kept mock users as untyped dictionaries with stringly
//! typed field access. Here each record is a tagged variant, validated at
//! the directory boundary, so a record's role is carried by its type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DirectoryError;
use crate::identity::{AgentProfile, ContractStatus, PlayerProfile, Role};

/// A stored agent account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub agency: String,
}

/// A stored player account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub age: u8,
    pub club: String,
    pub contract_status: ContractStatus,
    pub market_value: String,
    pub avatar: String,
    pub invite_code: String,
}

/// A user record held by the credential directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CredentialRecord {
    Agent(AgentRecord),
    Player(PlayerRecord),
}

impl CredentialRecord {
    /// The role this record implies. A pre-selected role hint overrides it.
    pub fn implied_role(&self) -> Role {
        match self {
            CredentialRecord::Agent(_) => Role::Agent,
            CredentialRecord::Player(_) => Role::Player,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CredentialRecord::Agent(a) => &a.name,
            CredentialRecord::Player(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            CredentialRecord::Agent(a) => &a.email,
            CredentialRecord::Player(p) => &p.email,
        }
    }

    /// Validate the record at the directory boundary.
    ///
    /// A record with an empty name or email is the typed equivalent of the
    /// source's "malformed backend response".
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name().trim().is_empty() {
            return Err(DirectoryError::InvalidRecord("empty name".to_string()));
        }
        if self.email().trim().is_empty() {
            return Err(DirectoryError::InvalidRecord("empty email".to_string()));
        }
        Ok(())
    }

    /// Build the agent profile this record describes.
    ///
    /// When the record is a player record but the caller resolved the Agent
    /// role (role hint wins over stored data), a demo agent profile is
    /// synthesized from the record's common fields.
    pub fn to_agent_profile(&self) -> AgentProfile {
        match self {
            CredentialRecord::Agent(a) => AgentProfile {
                id: a.id.clone(),
                name: a.name.clone(),
                email: a.email.clone(),
                agency: a.agency.clone(),
            },
            CredentialRecord::Player(p) => AgentProfile {
                id: format!("agent-{}", p.id),
                name: p.name.clone(),
                email: p.email.clone(),
                agency: "Demo Agency".to_string(),
            },
        }
    }

    /// Build the player profile this record describes.
    ///
    /// Symmetric to [`Self::to_agent_profile`]: an agent record resolved to
    /// the Player role yields a demo player profile.
    pub fn to_player_profile(&self) -> PlayerProfile {
        match self {
            CredentialRecord::Player(p) => PlayerProfile {
                id: p.id,
                name: p.name.clone(),
                email: p.email.clone(),
                position: p.position.clone(),
                age: p.age,
                club: p.club.clone(),
                contract_status: p.contract_status,
                market_value: p.market_value.clone(),
                avatar: p.avatar.clone(),
                invite_code: p.invite_code.clone(),
                documents: Vec::new(),
            },
            CredentialRecord::Agent(a) => PlayerProfile::new(a.name.clone(), a.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_record() -> CredentialRecord {
        CredentialRecord::Agent(AgentRecord {
            id: "agent-1".to_string(),
            name: "Sofia Marchetti".to_string(),
            email: "sofia@elitesports.com".to_string(),
            agency: "Elite Sports Group".to_string(),
        })
    }

    fn player_record() -> CredentialRecord {
        CredentialRecord::Player(PlayerRecord {
            id: Uuid::now_v7(),
            name: "Marco Rossi".to_string(),
            email: "marco@acmilan.com".to_string(),
            position: "Striker".to_string(),
            age: 23,
            club: "AC Milan".to_string(),
            contract_status: ContractStatus::UnderContract,
            market_value: "€4.5M".to_string(),
            avatar: "marco.png".to_string(),
            invite_code: "MR-2301".to_string(),
        })
    }

    #[test]
    fn test_implied_role_matches_variant() {
        assert_eq!(agent_record().implied_role(), Role::Agent);
        assert_eq!(player_record().implied_role(), Role::Player);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let record = CredentialRecord::Agent(AgentRecord {
            id: "x".to_string(),
            name: "  ".to_string(),
            email: "x@y.com".to_string(),
            agency: "A".to_string(),
        });
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_records() {
        assert!(agent_record().validate().is_ok());
        assert!(player_record().validate().is_ok());
    }

    #[test]
    fn test_player_record_resolved_as_agent_synthesizes_profile() {
        let profile = player_record().to_agent_profile();
        assert_eq!(profile.name, "Marco Rossi");
        assert_eq!(profile.agency, "Demo Agency");
    }

    #[test]
    fn test_player_profile_keeps_record_id() {
        let record = player_record();
        let id = match &record {
            CredentialRecord::Player(p) => p.id,
            _ => unreachable!(),
        };
        assert_eq!(record.to_player_profile().id, id);
    }

    #[test]
    fn test_record_serde_is_tagged() {
        let json = serde_json::to_string(&agent_record()).unwrap();
        assert!(json.contains("\"kind\":\"agent\""));
    }
}
