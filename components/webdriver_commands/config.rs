/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Defaults applied to every new command environment.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

/// Session defaults and polling behaviour for the command handlers.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Initial implicit wait for element lookups, in milliseconds.
    pub implicit_wait_ms: u64,
    /// Initial asynchronous script timeout, in milliseconds.
    pub async_script_ms: u64,
    /// Initial page load timeout, in milliseconds.
    pub page_load_ms: u64,
    /// Pause between two element lookups while an implicit wait is running.
    /// Zero polls the script bridge back to back.
    pub poll_interval_ms: u64,
    /// How long [`crate::ChannelScriptBridge`] waits for a reply. `None` waits forever.
    pub bridge_timeout_ms: Option<u64>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            implicit_wait_ms: 0,
            async_script_ms: 30_000,
            page_load_ms: 300_000,
            poll_interval_ms: 10,
            bridge_timeout_ms: None,
        }
    }
}

impl CommandConfig {
    /// Parses a JSON object. Missing keys keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a new configuration from environment variables
    ///
    /// Supports:
    /// - `WEBDRIVER_IMPLICIT_WAIT_MS`
    /// - `WEBDRIVER_SCRIPT_TIMEOUT_MS`
    /// - `WEBDRIVER_PAGE_LOAD_TIMEOUT_MS`
    /// - `WEBDRIVER_POLL_INTERVAL_MS`
    /// - `WEBDRIVER_BRIDGE_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let millis = |name: &str| -> Option<u64> {
            let value = lookup(name)?;
            match value.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warn!("Ignoring {}={:?}, expected milliseconds", name, value);
                    None
                },
            }
        };

        if let Some(ms) = millis("WEBDRIVER_IMPLICIT_WAIT_MS") {
            config.implicit_wait_ms = ms;
        }
        if let Some(ms) = millis("WEBDRIVER_SCRIPT_TIMEOUT_MS") {
            config.async_script_ms = ms;
        }
        if let Some(ms) = millis("WEBDRIVER_PAGE_LOAD_TIMEOUT_MS") {
            config.page_load_ms = ms;
        }
        if let Some(ms) = millis("WEBDRIVER_POLL_INTERVAL_MS") {
            config.poll_interval_ms = ms;
        }
        if let Some(ms) = millis("WEBDRIVER_BRIDGE_TIMEOUT_MS") {
            config.bridge_timeout_ms = Some(ms);
        }

        config
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn bridge_timeout(&self) -> Option<Duration> {
        self.bridge_timeout_ms.map(Duration::from_millis)
    }
}
