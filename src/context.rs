//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpIssueApi;
use crate::config::AppConfig;
use crate::host::BrowserHost;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Whether the creation form carries a map picker
    pub map_enabled: bool,
}

impl AppContext {
    pub fn new(config: AppConfig, map_enabled: bool) -> Self {
        Self {
            config: StoredValue::new(config),
            map_enabled,
        }
    }

    /// Client for the configured API base
    pub fn api(&self) -> HttpIssueApi {
        self.config.with_value(|c| HttpIssueApi::new(c.api_base.clone()))
    }

    pub fn host(&self) -> BrowserHost {
        BrowserHost
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency.clone())
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
