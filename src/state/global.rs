//! Global Application State
//!
//! Session and toast signals shared through context. Everything else is
//! page-local: each page owns its fetched snapshots and re-fetches after
//! its own mutations, so there is no cross-page cache to invalidate.

use leptos::*;

use crate::api::auth::{self, User};
use crate::api::client::FetchError;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current user, populated by the shell's session check and by the
    /// dashboard; `None` means anonymous (or session expired)
    pub user: RwSignal<Option<User>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        user: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Drop all local session state. The HTTP-only cookie is the backend's
    /// to clear; the client only forgets what it rendered.
    pub fn clear_session(&self) {
        self.user.set(None);
    }

    /// Ask the backend who we are and update the session signal. A 401
    /// just means anonymous; other failures are logged, not surfaced.
    pub fn refresh_session(&self) {
        let user_signal = self.user;
        spawn_local(async move {
            match auth::fetch_current_user().await {
                Ok(user) => user_signal.set(Some(user)),
                Err(FetchError::Unauthorized) => user_signal.set(None),
                Err(e) => {
                    tracing::warn!("session check failed: {}", e);
                    user_signal.set(None);
                }
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
