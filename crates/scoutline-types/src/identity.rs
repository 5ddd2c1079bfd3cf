//! Identity types: roles, profiles, and the authenticated session.
//!
//! `Role` determines which side of the product is acting (an agent managing
//! players, or a player managed by an agent). `Session` carries exactly one
//! profile, matching its role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Which side of the product is acting.
///
/// Determines which unread counter and which conversation perspective
/// applies throughout the messaging subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Player,
}

impl Role {
    /// Human-readable name, used in notification titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Agent => "Agent",
            Role::Player => "Player",
        }
    }

    /// The other side of a conversation.
    pub fn recipient(&self) -> Role {
        match self {
            Role::Agent => Role::Player,
            Role::Player => Role::Agent,
        }
    }

    /// Infer a role from an email address.
    ///
    /// Demo heuristic used when auto-provisioning an unknown login:
    /// a role-indicating substring in the email wins, otherwise Player.
    pub fn infer_from_email(email: &str) -> Role {
        if email.to_lowercase().contains("agent") {
            Role::Agent
        } else {
            Role::Player
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Agent => write!(f, "agent"),
            Role::Player => write!(f, "player"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agent" => Ok(Role::Agent),
            "player" => Ok(Role::Player),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// Contract situation of a player, shown on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    UnderContract,
    Negotiating,
    Free,
}

impl Default for ContractStatus {
    fn default() -> Self {
        ContractStatus::Free
    }
}

/// A document attached to a player's file (contract scan, medical report).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            url: None,
            uploaded_at: Utc::now(),
        }
    }
}

/// Profile of a sports agent. Immutable once loaded for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Opaque identifier (not a UUID -- carried over from backend records).
    pub id: String,
    pub name: String,
    pub email: String,
    pub agency: String,
}

/// Profile of a player on an agent's roster.
///
/// `id` is generated once at creation and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub age: u8,
    pub club: String,
    pub contract_status: ContractStatus,
    /// Display string, e.g. "€2.5M". Not used for arithmetic.
    pub market_value: String,
    pub avatar: String,
    pub invite_code: String,
    pub documents: Vec<Document>,
}

impl PlayerProfile {
    /// Create a minimal player profile with a fresh id.
    ///
    /// Used by demo auto-provisioning; roster seed data fills in the
    /// remaining fields directly.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            position: String::new(),
            age: 0,
            club: String::new(),
            contract_status: ContractStatus::default(),
            market_value: String::new(),
            avatar: String::new(),
            invite_code: String::new(),
            documents: Vec::new(),
        }
    }
}

/// The authenticated identity and role for the current app usage period.
///
/// Exactly one of `agent`/`player` is populated, determined by `role`.
/// Construct via [`Session::for_agent`] or [`Session::for_player`] to keep
/// that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub agent: Option<AgentProfile>,
    pub player: Option<PlayerProfile>,
}

impl Session {
    pub fn for_agent(profile: AgentProfile) -> Self {
        Self {
            role: Role::Agent,
            agent: Some(profile),
            player: None,
        }
    }

    pub fn for_player(profile: PlayerProfile) -> Self {
        Self {
            role: Role::Player,
            agent: None,
            player: Some(profile),
        }
    }

    /// Display name of whoever is logged in.
    pub fn display_name(&self) -> &str {
        match self.role {
            Role::Agent => self.agent.as_ref().map(|a| a.name.as_str()).unwrap_or(""),
            Role::Player => self.player.as_ref().map(|p| p.name.as_str()).unwrap_or(""),
        }
    }
}
