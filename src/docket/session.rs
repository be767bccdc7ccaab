use crate::docket::model::Principal;

pub const DEFAULT_TAB: &str = "incidents";

/// App-session-scoped state. Explicit fields instead of ambient storage
/// lookups: initialized on login, partially cleared on logout.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    authenticated: Option<Principal>,
    /// Principal the one-time splash was already shown for this session.
    splash_shown_for: Option<Principal>,
    active_tab: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a login. Returns true when the one-time splash should be shown:
    /// once per principal per app session, so re-login as the same principal
    /// does not replay it.
    pub fn on_login(&mut self, principal: Principal) -> bool {
        let show_splash = self.splash_shown_for.as_ref() != Some(&principal);
        if show_splash {
            self.splash_shown_for = Some(principal.clone());
        }
        self.authenticated = Some(principal);
        show_splash
    }

    /// Clear authentication and tab state. The splash marker survives so the
    /// same principal does not see the splash again this session.
    pub fn on_logout(&mut self) {
        self.authenticated = None;
        self.active_tab = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.is_some()
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.authenticated.as_ref()
    }

    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = Some(tab.into());
    }

    pub fn active_tab(&self) -> &str {
        self.active_tab.as_deref().unwrap_or(DEFAULT_TAB)
    }

    /// Fragment identifier mirroring the current tab, e.g. "#evidence".
    pub fn fragment(&self) -> String {
        format!("#{}", self.active_tab())
    }
}
