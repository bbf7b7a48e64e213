/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use webdriver::error::{WebDriverError, WebDriverResult};

use crate::status::StatusCode;

const MISSING_PARAMETER_PREFIX: &str = "Missing parameter: ";

/// The outcome of a single command, as handed back to the dispatcher.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    status: StatusCode,
    value: Value,
    error: Option<String>,
}

/// The shape accepted from the script bridge. Every field but `status` may be absent.
#[derive(Deserialize)]
struct WireResponse {
    status: StatusCode,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
}

impl Response {
    pub fn success(value: Value) -> Response {
        Response {
            status: StatusCode::Success,
            value,
            error: None,
        }
    }

    pub fn success_void() -> Response {
        Response::success(Value::Null)
    }

    /// Builds a failure. Passing [`StatusCode::Success`] yields a plain void success,
    /// since a successful response never carries an error message.
    pub fn error<S: Into<String>>(status: StatusCode, message: S) -> Response {
        if status.is_success() {
            return Response::success_void();
        }
        Response {
            status,
            value: Value::Null,
            error: Some(message.into()),
        }
    }

    pub fn missing_parameter(key: &str) -> Response {
        Response::error(
            StatusCode::MissingParameters,
            format!("{}{}", MISSING_PARAMETER_PREFIX, key),
        )
    }

    /// Parses a Response-shaped JSON object as produced by the script bridge.
    /// Unparsable input becomes an [`StatusCode::UnhandledError`] response.
    pub fn from_json(json: &str) -> Response {
        let wire: WireResponse = match serde_json::from_str(json) {
            Ok(wire) => wire,
            Err(error) => {
                warn!("Unable to parse script bridge result {:?}: {}", json, error);
                return Response::error(
                    StatusCode::UnhandledError,
                    format!("Unable to parse script bridge result: {}", error),
                );
            },
        };

        if wire.status.is_success() {
            if wire.error.is_some() {
                debug!("Dropping error message from successful bridge result");
            }
            return Response::success(wire.value);
        }

        // Older atoms report failures as {"value": {"message": ...}}.
        let error = wire.error.or_else(|| match wire.value {
            Value::Object(ref map) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        });

        Response {
            status: wire.status,
            value: wire.value,
            error: Some(error.unwrap_or_default()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|error| {
            format!(
                "{{\"status\":{},\"value\":null,\"error\":{:?}}}",
                StatusCode::UnhandledError.code(),
                error.to_string()
            )
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Only handlers remap their own result status, and never onto success.
    pub(crate) fn set_status(&mut self, status: StatusCode) {
        debug_assert!(!status.is_success());
        self.status = status;
        if self.error.is_none() {
            self.error = Some(String::new());
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The key named by a response built with [`Response::missing_parameter`].
    pub fn missing_parameter_key(&self) -> Option<&str> {
        if self.status != StatusCode::MissingParameters {
            return None;
        }
        self.error
            .as_deref()
            .and_then(|message| message.strip_prefix(MISSING_PARAMETER_PREFIX))
    }

    pub fn into_result(self) -> WebDriverResult<Value> {
        match self.status.error_status() {
            None => Ok(self.value),
            Some(status) => Err(WebDriverError::new(
                status,
                self.error.unwrap_or_default(),
            )),
        }
    }
}
