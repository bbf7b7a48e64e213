/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, after, bounded, never, select};
use log::{debug, warn};
use serde_json::Value;

use crate::environment::FrameContext;
use crate::response::Response;
use crate::status::StatusCode;

/// The channel into the browser engine that runs atoms inside the page.
///
/// Every call blocks until the engine answers, and the answer is a
/// Response-shaped JSON object: `{"status": .., "value": .., "error": ..}`.
pub trait ScriptBridge: Send {
    fn find_elements(
        &self,
        using: &str,
        value: &str,
        root: Option<&Value>,
        frame: &FrameContext,
    ) -> String;
}

/// Messages to the thread that drives the browser engine.
#[derive(Debug)]
pub enum BridgeRequest {
    FindElements {
        using: String,
        value: String,
        /// The element to search beneath, or `None` for the whole document.
        root: Option<Value>,
        /// See [`FrameContext::to_json`].
        frame: Value,
        reply: Sender<String>,
    },
}

/// A [`ScriptBridge`] that forwards each call as a [`BridgeRequest`] and blocks on the reply.
pub struct ChannelScriptBridge {
    sender: Sender<BridgeRequest>,
    /// How long to wait for the engine to answer. `None` waits forever.
    timeout: Option<Duration>,
}

impl ChannelScriptBridge {
    pub fn new(sender: Sender<BridgeRequest>, timeout: Option<Duration>) -> ChannelScriptBridge {
        ChannelScriptBridge { sender, timeout }
    }

    fn send_request(&self, request: BridgeRequest) -> Result<(), Response> {
        self.sender.send(request).map_err(|_| {
            warn!("Script bridge is disconnected");
            Response::error(
                StatusCode::UnhandledError,
                "Failed to send message to the script bridge",
            )
        })
    }
}

impl ScriptBridge for ChannelScriptBridge {
    fn find_elements(
        &self,
        using: &str,
        value: &str,
        root: Option<&Value>,
        frame: &FrameContext,
    ) -> String {
        let (reply, receiver) = bounded(1);
        let request = BridgeRequest::FindElements {
            using: using.to_owned(),
            value: value.to_owned(),
            root: root.cloned(),
            frame: frame.to_json(),
            reply,
        };
        if let Err(response) = self.send_request(request) {
            return response.to_json();
        }
        match wait_for_bridge_response(receiver, self.timeout) {
            Ok(json) => json,
            Err(response) => response.to_json(),
        }
    }
}

fn wait_for_bridge_response(
    receiver: Receiver<String>,
    timeout: Option<Duration>,
) -> Result<String, Response> {
    let deadline = match timeout {
        Some(timeout) => after(timeout),
        None => never(),
    };
    select! {
        recv(receiver) -> reply => reply.map_err(|_| {
            debug!("Script bridge dropped the reply channel");
            Response::error(
                StatusCode::UnhandledError,
                "The script bridge closed without answering",
            )
        }),
        recv(deadline) -> _ => Err(Response::error(
            StatusCode::Timeout,
            "Timed out waiting for the script bridge",
        )),
    }
}
