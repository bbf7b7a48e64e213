/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::bridge::ScriptBridge;
use crate::config::CommandConfig;

/// <https://w3c.github.io/webdriver/#dfn-web-frame-identifier>
const FRAME_IDENTIFIER: &str = "frame-075b-4da1-b6ba-e579c2d3230a";

/// <https://w3c.github.io/webdriver/#dfn-session-timeouts>
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Timeouts {
    /// Time to wait for the element location strategy when retrieving elements.
    #[serde(rename = "implicit")]
    pub implicit_wait_ms: u64,

    /// Time to wait for asynchronous scripts to run before interrupting them.
    #[serde(rename = "script")]
    pub async_script_ms: u64,

    /// Time to wait for a page to finish loading upon navigation.
    #[serde(rename = "pageLoad")]
    pub page_load_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeoutKind {
    Implicit,
    Script,
    PageLoad,
}

impl TimeoutKind {
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "implicit" => Some(TimeoutKind::Implicit),
            "script" => Some(TimeoutKind::Script),
            "page load" => Some(TimeoutKind::PageLoad),
            _ => None,
        }
    }
}

/// The document or frame that script evaluation targets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FrameContext {
    #[default]
    TopLevel,
    /// A child frame, identified by the reference the script bridge handed out for it.
    Frame(String),
}

impl FrameContext {
    /// The frame argument passed to script bridge calls.
    pub fn to_json(&self) -> Value {
        match self {
            FrameContext::TopLevel => Value::Null,
            FrameContext::Frame(reference) => json!({ FRAME_IDENTIFIER: reference }),
        }
    }
}

/// Per-session state shared by every command handled for that session.
///
/// Handlers borrow the environment mutably for the duration of a command, so a
/// session runs one command at a time and no locking is needed.
pub struct CommandEnvironment {
    /// <https://www.w3.org/TR/webdriver2/#dfn-session-id>
    id: Uuid,

    timeouts: Timeouts,

    /// <https://www.w3.org/TR/webdriver2/#dfn-current-browsing-context>
    frame_context: FrameContext,

    bridge: Box<dyn ScriptBridge>,
}

impl CommandEnvironment {
    pub fn new(bridge: Box<dyn ScriptBridge>, config: &CommandConfig) -> CommandEnvironment {
        CommandEnvironment {
            id: Uuid::new_v4(),
            timeouts: Timeouts {
                implicit_wait_ms: config.implicit_wait_ms,
                async_script_ms: config.async_script_ms,
                page_load_ms: config.page_load_ms,
            },
            frame_context: FrameContext::TopLevel,
            bridge,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.id
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub(crate) fn set_timeout(&mut self, kind: TimeoutKind, ms: u64) {
        match kind {
            TimeoutKind::Implicit => self.timeouts.implicit_wait_ms = ms,
            TimeoutKind::Script => self.timeouts.async_script_ms = ms,
            TimeoutKind::PageLoad => self.timeouts.page_load_ms = ms,
        }
    }

    pub fn frame_context(&self) -> &FrameContext {
        &self.frame_context
    }

    pub fn set_frame_context(&mut self, frame_context: FrameContext) {
        self.frame_context = frame_context;
    }

    pub fn bridge(&self) -> &dyn ScriptBridge {
        self.bridge.as_ref()
    }
}
