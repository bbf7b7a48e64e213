/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde_json::json;
use webdriver_commands::{
    Command, CommandConfig, CommandEnvironment, CommandHandler, CommandRegistry, Parameters,
    Response, StatusCode, required_parameter,
};

use crate::support::{elements, environment, parameters};

struct EchoHandler;

impl CommandHandler for EchoHandler {
    fn execute(&self, _environment: &mut CommandEnvironment, parameters: &Parameters) -> Response {
        match required_parameter(parameters, "text") {
            Ok(text) => Response::success(text.clone()),
            Err(response) => response,
        }
    }
}

#[test]
fn test_builtin_commands_are_registered() {
    let registry = CommandRegistry::new(&CommandConfig::default());
    for command in Command::ALL {
        assert!(registry.contains(command.name()));
        assert_eq!(Command::from_name(command.name()), Some(command));
    }
    assert_eq!(registry.names().count(), Command::ALL.len());
    assert_eq!(Command::from_name("findelements"), None);
}

#[test]
fn test_unknown_command() {
    let registry = CommandRegistry::new(&CommandConfig::default());
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    let response = registry.execute("goBack", &mut env, &parameters(json!({})));
    assert_eq!(response.status(), StatusCode::UnknownCommand);
    assert_eq!(response.error_message(), Some("Command not implemented: goBack"));
}

#[test]
fn test_dispatch_shares_session_state() {
    let registry = CommandRegistry::new(&CommandConfig::default());
    let (mut env, log) = environment(vec![elements(&[]), elements(&["found"])], 0);

    let response = registry.execute(
        "setTimeout",
        &mut env,
        &parameters(json!({ "type": "implicit", "ms": 2000 })),
    );
    assert!(response.is_success());

    let response = registry.execute(
        "findElements",
        &mut env,
        &parameters(json!({ "using": "id", "value": "found" })),
    );
    assert_eq!(response.value(), &json!([{ "ELEMENT": "found" }]));
    assert_eq!(log.count(), 2);
}

#[test]
fn test_register_custom_handler() {
    let mut registry = CommandRegistry::new(&CommandConfig::default());
    assert!(registry.register("echo", Box::new(EchoHandler)).is_none());
    assert!(registry.register("echo", Box::new(EchoHandler)).is_some());

    let (mut env, _log) = environment(vec![elements(&[])], 0);
    let response = registry.execute("echo", &mut env, &parameters(json!({ "text": "hi" })));
    assert_eq!(response.value(), &json!("hi"));

    let response = registry.execute("echo", &mut env, &parameters(json!({})));
    assert_eq!(response.missing_parameter_key(), Some("text"));
}
