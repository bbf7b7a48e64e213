/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use log::debug;
use serde_json::Value;

use crate::environment::{CommandEnvironment, TimeoutKind};
use crate::response::Response;
use crate::status::StatusCode;
use crate::{CommandHandler, Parameters, parameter_text, required_parameter};

/// Handles "setTimeout": `type` selects the timeout, `ms` is its new value.
pub struct SetTimeoutHandler;

impl CommandHandler for SetTimeoutHandler {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        let timeout_type = match required_parameter(parameters, "type") {
            Ok(value) => parameter_text(value),
            Err(response) => return response,
        };
        let ms = match required_parameter(parameters, "ms") {
            Ok(value) => value,
            Err(response) => return response,
        };

        match TimeoutKind::from_wire(&timeout_type) {
            Some(kind) => commit_timeout(environment, kind, ms),
            None => Response::error(
                StatusCode::UnhandledError,
                format!("'{}' is not a valid timeout type", timeout_type),
            ),
        }
    }
}

/// Handles "implicitlyWait", the single-purpose form of `setTimeout` with `type` "implicit".
pub struct ImplicitlyWaitHandler;

impl CommandHandler for ImplicitlyWaitHandler {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        match required_parameter(parameters, "ms") {
            Ok(ms) => commit_timeout(environment, TimeoutKind::Implicit, ms),
            Err(response) => response,
        }
    }
}

/// Handles "setScriptTimeout", the single-purpose form of `setTimeout` with `type` "script".
pub struct SetScriptTimeoutHandler;

impl CommandHandler for SetScriptTimeoutHandler {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        match required_parameter(parameters, "ms") {
            Ok(ms) => commit_timeout(environment, TimeoutKind::Script, ms),
            Err(response) => response,
        }
    }
}

/// Handles "getTimeouts".
pub struct GetTimeoutsHandler;

impl CommandHandler for GetTimeoutsHandler {
    fn execute(&self, environment: &mut CommandEnvironment, _parameters: &Parameters) -> Response {
        match serde_json::to_value(environment.timeouts()) {
            Ok(value) => Response::success(value),
            Err(error) => Response::error(StatusCode::UnhandledError, error.to_string()),
        }
    }
}

/// Converts `ms` and only then writes it, so a bad value leaves the session untouched.
fn commit_timeout(environment: &mut CommandEnvironment, kind: TimeoutKind, ms: &Value) -> Response {
    let Some(ms) = timeout_millis(ms) else {
        return Response::error(
            StatusCode::UnhandledError,
            format!("'{}' is not a valid timeout value", parameter_text(ms)),
        );
    };
    debug!(
        "Session {}: {:?} timeout set to {}ms",
        environment.session_id(),
        kind,
        ms
    );
    environment.set_timeout(kind, ms);
    Response::success_void()
}

/// Integral numbers pass through, fractions round half to even, and numeric
/// strings are parsed the same way. Negative or non-finite values are rejected.
fn timeout_millis(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => match number.as_u64() {
            Some(ms) => Some(ms),
            None => number.as_f64().and_then(float_millis),
        },
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(float_millis))
        },
        _ => None,
    }
}

fn float_millis(ms: f64) -> Option<u64> {
    let rounded = ms.round_ties_even();
    if !rounded.is_finite() || rounded < 0.0 || rounded > u64::MAX as f64 {
        return None;
    }
    Some(rounded as u64)
}
