//! Session manager: the login/logout/role-selection state machine.
//!
//! `SessionManager` owns the current `Session` (created on successful
//! login, destroyed on logout) and mediates every transition of the
//! authentication flow. Credential lookup goes through the
//! `CredentialDirectory` port; an unknown email is auto-provisioned as a
//! demo identity rather than rejected.
//!
//! Role-hint precedence: a role explicitly selected before login always
//! wins over whatever role the stored or provisioned record implies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use scoutline_types::config::AppConfig;
use scoutline_types::error::AuthError;
use scoutline_types::identity::{Role, Session};
use scoutline_types::record::{AgentRecord, CredentialRecord, PlayerRecord};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::directory::CredentialDirectory;

/// Where the user currently is in the authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Onboarding,
    RoleSelection,
    LoginForm,
    Authenticated,
}

/// Mutable authentication state, kept behind one lock.
///
/// The lock is never held across an await point: `login` reads what it
/// needs up front, drops the guard for the async work, and reacquires it
/// to commit the outcome.
struct AuthState {
    flow: AuthFlow,
    role_hint: Option<Role>,
    session: Option<Session>,
    last_error: Option<String>,
}

/// Owns authentication state and the identity of the current actor.
pub struct SessionManager<D: CredentialDirectory> {
    directory: D,
    state: Arc<RwLock<AuthState>>,
    login_in_flight: Arc<AtomicBool>,
    login_latency: Duration,
}

/// Resets the in-flight flag on every exit path, including early returns.
struct FlightGuard(Arc<AtomicBool>);

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<D: CredentialDirectory> SessionManager<D> {
    /// Create a session manager starting at the onboarding screen.
    pub fn new(directory: D, config: &AppConfig) -> Self {
        Self {
            directory,
            state: Arc::new(RwLock::new(AuthState {
                flow: AuthFlow::Onboarding,
                role_hint: None,
                session: None,
                last_error: None,
            })),
            login_in_flight: Arc::new(AtomicBool::new(false)),
            login_latency: Duration::from_millis(config.login_latency_ms),
        }
    }

    // --- State transitions ---

    /// Onboarding -> RoleSelection. No preconditions, no errors.
    pub fn complete_onboarding(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.flow == AuthFlow::Onboarding {
            state.flow = AuthFlow::RoleSelection;
        }
    }

    /// Record a pending role hint and move to the login form.
    ///
    /// Valid from RoleSelection; calling again from the login form simply
    /// overwrites the hint. Ignored in other states.
    pub fn select_role(&self, role: Role) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match state.flow {
            AuthFlow::RoleSelection | AuthFlow::LoginForm => {
                state.role_hint = Some(role);
                state.flow = AuthFlow::LoginForm;
            }
            _ => {}
        }
    }

    /// Authenticate, building a `Session` from the directory record (or a
    /// freshly provisioned demo identity when the email is unknown).
    ///
    /// Simulates network latency; a second call while one is in flight is
    /// rejected with [`AuthError::LoginInProgress`] without touching state.
    /// On failure the prior state is untouched and the error message is
    /// retained for the UI until the next attempt clears it.
    ///
    /// The password is accepted but not verified -- authentication in this
    /// demo is a directory lookup, not a credential check.
    pub async fn login(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        if self
            .login_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(email, "login ignored: another attempt is in flight");
            return Err(AuthError::LoginInProgress);
        }
        let _guard = FlightGuard(Arc::clone(&self.login_in_flight));

        let role_hint = {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.last_error = None;
            state.role_hint
        };

        tokio::time::sleep(self.login_latency).await;

        match self.resolve_session(email, role_hint).await {
            Ok(session) => {
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                state.session = Some(session.clone());
                state.flow = AuthFlow::Authenticated;
                state.role_hint = None;
                state.last_error = None;
                info!(email, role = %session.role, "login succeeded");
                Ok(session)
            }
            Err(err) => {
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                state.last_error = Some(err.to_string());
                warn!(email, error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// Clear the session and return to role selection. Always succeeds.
    pub fn logout(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.session = None;
        state.role_hint = None;
        state.flow = AuthFlow::RoleSelection;
        info!("logged out");
    }

    // --- Read-only accessors for the UI ---

    pub fn flow(&self) -> AuthFlow {
        self.state.read().unwrap_or_else(|e| e.into_inner()).flow
    }

    pub fn session(&self) -> Option<Session> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .session
            .clone()
    }

    pub fn role_hint(&self) -> Option<Role> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .role_hint
    }

    /// Human-readable message from the last failed login attempt.
    ///
    /// Retained until the next attempt or logout clears it.
    pub fn last_error(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last_error
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.flow() == AuthFlow::Authenticated
    }

    // --- Login internals ---

    async fn resolve_session(
        &self,
        email: &str,
        role_hint: Option<Role>,
    ) -> Result<Session, AuthError> {
        let record = match self.directory.lookup(email).await? {
            Some(record) => record,
            None => {
                let role = role_hint.unwrap_or_else(|| Role::infer_from_email(email));
                let record = demo_record(email, role);
                self.directory.provision(record.clone()).await?;
                info!(email, role = %role, "auto-provisioned demo identity");
                record
            }
        };

        // Hint wins over the role the record implies.
        let role = role_hint.unwrap_or_else(|| record.implied_role());
        let session = match role {
            Role::Agent => Session::for_agent(record.to_agent_profile()),
            Role::Player => Session::for_player(record.to_player_profile()),
        };
        Ok(session)
    }
}

/// Build an ephemeral demo record for an unknown login.
fn demo_record(email: &str, role: Role) -> CredentialRecord {
    let name = display_name_from_email(email);
    match role {
        Role::Agent => CredentialRecord::Agent(AgentRecord {
            id: format!("agent-{}", Uuid::now_v7()),
            name,
            email: email.to_string(),
            agency: "Demo Agency".to_string(),
        }),
        Role::Player => CredentialRecord::Player(PlayerRecord {
            id: Uuid::now_v7(),
            name,
            email: email.to_string(),
            position: "Midfielder".to_string(),
            age: 21,
            club: "Free Agent FC".to_string(),
            contract_status: Default::default(),
            market_value: "—".to_string(),
            avatar: String::new(),
            invite_code: String::new(),
        }),
    }
}

/// "jane.doe@x.com" -> "Jane Doe".
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        email.to_string()
    } else {
        words.join(" ")
    }
}
