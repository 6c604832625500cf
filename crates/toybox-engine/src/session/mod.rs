//! Explicit session context for the storefront.
//!
//! Handlers receive a [`SessionContext`] instead of reaching for a global
//! auth/cart store. Login and logout are the only transitions that touch the
//! cart count; the count itself comes from a [`CartCountSource`] supplied by
//! the caller (normally the backend API client).

use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("session rejected by cart service")]
    Unauthorized,
    #[error("cart service unavailable: {0}")]
    Unavailable(String),
}

/// Backend collaborator that knows how many items a user has in their cart
pub trait CartCountSource {
    fn fetch_cart_count(&self, token: &str) -> Result<u32, CartError>;
}

impl<F> CartCountSource for F
where
    F: Fn(&str) -> Result<u32, CartError>,
{
    fn fetch_cart_count(&self, token: &str) -> Result<u32, CartError> {
        self(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: String,
    pub display_name: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    SignedIn(UserSession),
}

/// What changed during a transition, for the UI to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn { user_id: String },
    LoggedOut,
    CartCountChanged { from: u32, to: u32 },
    CartRefreshFailed(CartError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    auth: AuthState,
    cart_count: u32,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn user(&self) -> Option<&UserSession> {
        match &self.auth {
            AuthState::SignedIn(user) => Some(user),
            AuthState::Anonymous => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Sign a user in and pull their cart count.
    ///
    /// A failed fetch does not undo the login; it shows up as
    /// [`SessionEvent::CartRefreshFailed`] and the previous count is kept.
    pub fn login(&mut self, user: UserSession, source: &impl CartCountSource) -> Vec<SessionEvent> {
        info!("user {} signed in", user.user_id);
        let mut events = vec![SessionEvent::LoggedIn {
            user_id: user.user_id.clone(),
        }];
        self.auth = AuthState::SignedIn(user);

        match self.refresh_cart_count(source) {
            Ok(Some(changed)) => events.push(changed),
            Ok(None) => {}
            Err(err) => events.push(SessionEvent::CartRefreshFailed(err)),
        }
        events
    }

    /// Sign out and reset the cart count without calling the backend
    pub fn logout(&mut self) -> Vec<SessionEvent> {
        let AuthState::SignedIn(user) = std::mem::take(&mut self.auth) else {
            return Vec::new();
        };
        info!("user {} signed out", user.user_id);

        let mut events = vec![SessionEvent::LoggedOut];
        if let Some(changed) = self.set_cart_count(0) {
            events.push(changed);
        }
        events
    }

    /// Re-fetch the cart count for the signed-in user.
    ///
    /// Returns `Ok(None)` when the count did not change.
    pub fn refresh_cart_count(
        &mut self,
        source: &impl CartCountSource,
    ) -> Result<Option<SessionEvent>, CartError> {
        let token = match &self.auth {
            AuthState::SignedIn(user) => user.token.as_str(),
            AuthState::Anonymous => return Err(CartError::NotSignedIn),
        };

        match source.fetch_cart_count(token) {
            Ok(count) => Ok(self.set_cart_count(count)),
            Err(err) => {
                warn!("cart count refresh failed, keeping {}: {err}", self.cart_count);
                Err(err)
            }
        }
    }

    fn set_cart_count(&mut self, count: u32) -> Option<SessionEvent> {
        if self.cart_count == count {
            return None;
        }
        let from = std::mem::replace(&mut self.cart_count, count);
        Some(SessionEvent::CartCountChanged { from, to: count })
    }
}
