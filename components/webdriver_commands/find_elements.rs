/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use serde_json::Value;

use crate::environment::CommandEnvironment;
use crate::response::Response;
use crate::status::StatusCode;
use crate::{CommandHandler, Parameters, parameter_text, required_parameter};

/// Handles "findElements": locates every element matching `using`/`value`,
/// retrying for up to the session's implicit wait while nothing matches.
pub struct FindElementsHandler {
    poll_interval: Duration,
}

impl FindElementsHandler {
    pub fn new(poll_interval: Duration) -> FindElementsHandler {
        FindElementsHandler { poll_interval }
    }

    fn find_elements(
        &self,
        environment: &CommandEnvironment,
        using: &str,
        value: &str,
    ) -> Response {
        let implicit_wait = Duration::from_millis(environment.timeouts().implicit_wait_ms);
        let deadline = Instant::now() + implicit_wait;
        let mut attempts = 0;

        // The bridge is always asked at least once, even with no implicit wait.
        loop {
            attempts += 1;
            let result = environment.bridge().find_elements(
                using,
                value,
                None,
                environment.frame_context(),
            );
            let mut response = Response::from_json(&result);

            match response.status() {
                StatusCode::Success => {
                    if has_elements(response.value()) {
                        debug!(
                            "Found elements with {} == {:?} after {} attempt(s)",
                            using, value, attempts
                        );
                        return response;
                    }
                },
                StatusCode::NoSuchElement => {},
                status => {
                    // Compatibility shim: only XPath lookups surface a malformed
                    // selector, other strategies report it as nothing found.
                    if status == StatusCode::InvalidSelector && !using.eq_ignore_ascii_case("xpath")
                    {
                        response.set_status(StatusCode::NoSuchElement);
                    }
                    return response;
                },
            }

            let now = Instant::now();
            if now >= deadline {
                debug!(
                    "Implicit wait of {:?} expired after {} attempt(s) with {} == {:?}",
                    implicit_wait, attempts, using, value
                );
                // Nothing found is still a successful lookup, so hand back what
                // the bridge said last.
                return response;
            }
            if !self.poll_interval.is_zero() {
                thread::sleep(self.poll_interval.min(deadline - now));
            }
        }
    }
}

impl CommandHandler for FindElementsHandler {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        let (using, value) = match locator_parameters(parameters) {
            Ok(locator) => locator,
            Err(response) => return response,
        };
        self.find_elements(environment, &using, &value)
    }
}

/// Handles "findElement": the first element "findElements" would return, or
/// `NoSuchElement` once the implicit wait runs out.
pub struct FindElementHandler {
    elements: FindElementsHandler,
}

impl FindElementHandler {
    pub fn new(poll_interval: Duration) -> FindElementHandler {
        FindElementHandler {
            elements: FindElementsHandler::new(poll_interval),
        }
    }
}

impl CommandHandler for FindElementHandler {
    fn execute(&self, environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        let (using, value) = match locator_parameters(parameters) {
            Ok(locator) => locator,
            Err(response) => return response,
        };
        let response = self.elements.find_elements(environment, &using, &value);
        if !response.is_success() {
            return response;
        }

        match response.into_value() {
            Value::Array(elements) if !elements.is_empty() => {
                Response::success(elements.into_iter().next().unwrap_or(Value::Null))
            },
            _ => Response::error(
                StatusCode::NoSuchElement,
                format!("Unable to find element with {} == {}", using, value),
            ),
        }
    }
}

fn locator_parameters(parameters: &Parameters) -> Result<(String, String), Response> {
    let using = required_parameter(parameters, "using")?;
    let value = required_parameter(parameters, "value")?;
    Ok((parameter_text(using), parameter_text(value)))
}

fn has_elements(value: &Value) -> bool {
    value.as_array().is_some_and(|elements| !elements.is_empty())
}
