/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde_json::{Value, json};
use webdriver_commands::{
    CommandHandler, GetTimeoutsHandler, ImplicitlyWaitHandler, SetScriptTimeoutHandler,
    SetTimeoutHandler, StatusCode, Timeouts,
};

use crate::support::{elements, environment, parameters};

const DEFAULTS: Timeouts = Timeouts {
    implicit_wait_ms: 0,
    async_script_ms: 30_000,
    page_load_ms: 300_000,
};

#[test]
fn test_set_implicit_wait() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    let response = SetTimeoutHandler.execute(
        &mut env,
        &parameters(json!({ "type": "implicit", "ms": 5000 })),
    );
    assert_eq!(response.status(), StatusCode::Success);
    assert_eq!(response.value(), &Value::Null);
    assert_eq!(
        env.timeouts(),
        Timeouts {
            implicit_wait_ms: 5000,
            ..DEFAULTS
        }
    );
}

#[test]
fn test_set_script_and_page_load() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    SetTimeoutHandler.execute(&mut env, &parameters(json!({ "type": "script", "ms": 10 })));
    SetTimeoutHandler.execute(
        &mut env,
        &parameters(json!({ "type": "page load", "ms": "20" })),
    );
    assert_eq!(
        env.timeouts(),
        Timeouts {
            implicit_wait_ms: 0,
            async_script_ms: 10,
            page_load_ms: 20,
        }
    );
}

#[test]
fn test_unknown_timeout_type() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    let response = SetTimeoutHandler.execute(
        &mut env,
        &parameters(json!({ "type": "bogus", "ms": 100 })),
    );
    assert_eq!(response.status(), StatusCode::UnhandledError);
    assert_eq!(
        response.error_message(),
        Some("'bogus' is not a valid timeout type")
    );
    assert_eq!(env.timeouts(), DEFAULTS);
}

#[test]
fn test_unconvertible_ms_leaves_timeouts_alone() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    for ms in [json!("soon"), json!(-5), json!(null), json!({ "ms": 1 })] {
        let response = SetTimeoutHandler.execute(
            &mut env,
            &parameters(json!({ "type": "implicit", "ms": ms })),
        );
        assert_eq!(response.status(), StatusCode::UnhandledError);
        assert!(response.error_message().unwrap().ends_with("is not a valid timeout value"));
    }
    assert_eq!(env.timeouts(), DEFAULTS);
}

#[test]
fn test_missing_parameters() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    let response = SetTimeoutHandler.execute(&mut env, &parameters(json!({ "ms": 5 })));
    assert_eq!(response.missing_parameter_key(), Some("type"));

    let response =
        SetTimeoutHandler.execute(&mut env, &parameters(json!({ "type": "implicit" })));
    assert_eq!(response.missing_parameter_key(), Some("ms"));

    let response = ImplicitlyWaitHandler.execute(&mut env, &parameters(json!({})));
    assert_eq!(response.missing_parameter_key(), Some("ms"));

    assert_eq!(env.timeouts(), DEFAULTS);
}

#[test]
fn test_single_purpose_forms() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    ImplicitlyWaitHandler.execute(&mut env, &parameters(json!({ "ms": 750 })));
    SetScriptTimeoutHandler.execute(&mut env, &parameters(json!({ "ms": 1.5 })));
    assert_eq!(env.timeouts().implicit_wait_ms, 750);
    assert_eq!(env.timeouts().async_script_ms, 2);
    assert_eq!(env.timeouts().page_load_ms, DEFAULTS.page_load_ms);
}

#[test]
fn test_get_timeouts() {
    let (mut env, _log) = environment(vec![elements(&[])], 0);
    ImplicitlyWaitHandler.execute(&mut env, &parameters(json!({ "ms": 42 })));
    let response = GetTimeoutsHandler.execute(&mut env, &parameters(json!({})));
    assert_eq!(
        response.value(),
        &json!({ "implicit": 42, "script": 30_000, "pageLoad": 300_000 })
    );
}
