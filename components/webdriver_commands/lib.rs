/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Command execution for a WebDriver session.
//!
//! A dispatcher decodes a wire command into a name and a [`Parameters`] map, then
//! hands both to [`CommandRegistry::execute`] together with the session's
//! [`CommandEnvironment`]. Every handler answers with a [`Response`]; failures are
//! data, never panics or `Err`s crossing the handler boundary.

#![crate_name = "webdriver_commands"]
#![crate_type = "rlib"]
#![deny(unsafe_code)]

mod bridge;
mod config;
mod environment;
mod find_elements;
mod registry;
mod response;
mod status;
mod timeouts;

use serde_json::{Map, Value};

pub use crate::bridge::{BridgeRequest, ChannelScriptBridge, ScriptBridge};
pub use crate::config::CommandConfig;
pub use crate::environment::{CommandEnvironment, FrameContext, TimeoutKind, Timeouts};
pub use crate::find_elements::{FindElementHandler, FindElementsHandler};
pub use crate::registry::{Command, CommandRegistry};
pub use crate::response::Response;
pub use crate::status::StatusCode;
pub use crate::timeouts::{
    GetTimeoutsHandler, ImplicitlyWaitHandler, SetScriptTimeoutHandler, SetTimeoutHandler,
};

/// The decoded parameters of one command. Keys are command specific.
pub type Parameters = Map<String, Value>;

/// Executes one kind of command.
///
/// Implementations must answer every input with a [`Response`], reporting an
/// absent required parameter through [`Response::missing_parameter`]. Anything
/// that has to outlive a single invocation belongs in the [`CommandEnvironment`].
pub trait CommandHandler: Send + Sync {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response;
}

/// Looks up `key`, or produces the response a handler should return when it is absent.
pub fn required_parameter<'a>(parameters: &'a Parameters, key: &str) -> Result<&'a Value, Response> {
    parameters
        .get(key)
        .ok_or_else(|| Response::missing_parameter(key))
}

/// Renders a loosely typed parameter as text: strings verbatim, anything else as JSON.
pub(crate) fn parameter_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
