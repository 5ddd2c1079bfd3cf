//! Hand-authored sample data for the demo.
//!
//! One agency with a small roster. The emails double as demo logins:
//! provisioning them into the directory makes every seeded identity
//! reachable from the login form.

use scoutline_core::directory::CredentialDirectory;
use scoutline_types::error::DirectoryError;
use scoutline_types::identity::{ContractStatus, Document, PlayerProfile};
use scoutline_types::record::{AgentRecord, CredentialRecord, PlayerRecord};
use uuid::Uuid;

/// The demo agency's agent account.
pub fn sample_agent() -> AgentRecord {
    AgentRecord {
        id: "agent-0001".to_string(),
        name: "Sofia Marchetti".to_string(),
        email: "sofia@elitesports.com".to_string(),
        agency: "Elite Sports Group".to_string(),
    }
}

/// The demo roster.
pub fn sample_players() -> Vec<PlayerProfile> {
    vec![
        player(
            "Marco Rossi",
            "marco.rossi@acmilan.com",
            "Striker",
            23,
            "AC Milan",
            ContractStatus::UnderContract,
            "€4.5M",
            "avatars/marco.png",
            "MR-2301",
            vec![
                Document::new("Contract 2024-2027.pdf"),
                Document::new("Medical Report March.pdf"),
            ],
        ),
        player(
            "Luka Petrović",
            "luka.petrovic@ajax.nl",
            "Central Midfielder",
            21,
            "Ajax",
            ContractStatus::Negotiating,
            "€2.8M",
            "avatars/luka.png",
            "LP-2102",
            vec![Document::new("Scouting Summary.pdf")],
        ),
        player(
            "Diego Fernández",
            "diego.fernandez@sevillafc.es",
            "Left Winger",
            25,
            "Sevilla FC",
            ContractStatus::UnderContract,
            "€6.0M",
            "avatars/diego.png",
            "DF-2503",
            Vec::new(),
        ),
        player(
            "Tomás Silva",
            "tomas.silva@free.example",
            "Goalkeeper",
            28,
            "Unattached",
            ContractStatus::Free,
            "€1.2M",
            "avatars/tomas.png",
            "TS-2804",
            Vec::new(),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn player(
    name: &str,
    email: &str,
    position: &str,
    age: u8,
    club: &str,
    contract_status: ContractStatus,
    market_value: &str,
    avatar: &str,
    invite_code: &str,
    documents: Vec<Document>,
) -> PlayerProfile {
    PlayerProfile {
        id: Uuid::now_v7(),
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
        age,
        club: club.to_string(),
        contract_status,
        market_value: market_value.to_string(),
        avatar: avatar.to_string(),
        invite_code: invite_code.to_string(),
        documents,
    }
}

fn record_for(player: &PlayerProfile) -> PlayerRecord {
    PlayerRecord {
        id: player.id,
        name: player.name.clone(),
        email: player.email.clone(),
        position: player.position.clone(),
        age: player.age,
        club: player.club.clone(),
        contract_status: player.contract_status,
        market_value: player.market_value.clone(),
        avatar: player.avatar.clone(),
        invite_code: player.invite_code.clone(),
    }
}

/// Provision the sample agent and roster into a directory.
///
/// Returns the roster so callers can seed chats from the same profiles
/// (ids must match what the directory will hand back at login).
pub async fn seed_directory<D: CredentialDirectory>(
    directory: &D,
) -> Result<Vec<PlayerProfile>, DirectoryError> {
    directory
        .provision(CredentialRecord::Agent(sample_agent()))
        .await?;

    let players = sample_players();
    for player in &players {
        directory
            .provision(CredentialRecord::Player(record_for(player)))
            .await?;
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDirectory;

    #[test]
    fn sample_records_pass_boundary_validation() {
        assert!(CredentialRecord::Agent(sample_agent()).validate().is_ok());
        for player in sample_players() {
            assert!(CredentialRecord::Player(record_for(&player))
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn roster_emails_are_unique() {
        let players = sample_players();
        let mut emails: Vec<_> = players.iter().map(|p| p.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), players.len());
    }

    #[tokio::test]
    async fn seed_directory_provisions_agent_and_roster() {
        let dir = InMemoryDirectory::new();
        let players = seed_directory(&dir).await.unwrap();

        assert_eq!(dir.len(), players.len() + 1);
        let found = dir.lookup("sofia@elitesports.com").await.unwrap().unwrap();
        assert_eq!(found.name(), "Sofia Marchetti");

        // Directory record ids line up with the returned profiles.
        let marco = dir
            .lookup("marco.rossi@acmilan.com")
            .await
            .unwrap()
            .unwrap();
        let profile = players.iter().find(|p| p.name == "Marco Rossi").unwrap();
        assert_eq!(marco.to_player_profile().id, profile.id);
    }
}
