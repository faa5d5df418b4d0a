//! Shared handler state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::application::WorryApp;

/// Every request locks the one [`WorryApp`], so events are handled one at
/// a time and each runs to completion.
#[derive(Clone)]
pub struct AppState {
    app: Arc<Mutex<WorryApp>>,
}

impl AppState {
    pub fn new(app: WorryApp) -> Self {
        Self {
            app: Arc::new(Mutex::new(app)),
        }
    }

    pub fn app(&self) -> &Mutex<WorryApp> {
        &self.app
    }
}

/// Success envelope. `unsaved` is present while the latest write to the
/// store has failed.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsaved: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(app: &WorryApp, data: T) -> Self {
        Self {
            data,
            unsaved: app.unsaved_notice(),
        }
    }
}
