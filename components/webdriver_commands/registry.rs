/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;

use log::info;

use crate::config::CommandConfig;
use crate::environment::CommandEnvironment;
use crate::find_elements::{FindElementHandler, FindElementsHandler};
use crate::response::Response;
use crate::status::StatusCode;
use crate::timeouts::{
    GetTimeoutsHandler, ImplicitlyWaitHandler, SetScriptTimeoutHandler, SetTimeoutHandler,
};
use crate::{CommandHandler, Parameters};

/// The commands this crate implements itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    FindElement,
    FindElements,
    SetTimeout,
    ImplicitlyWait,
    SetScriptTimeout,
    GetTimeouts,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::FindElement,
        Command::FindElements,
        Command::SetTimeout,
        Command::ImplicitlyWait,
        Command::SetScriptTimeout,
        Command::GetTimeouts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::FindElement => "findElement",
            Command::FindElements => "findElements",
            Command::SetTimeout => "setTimeout",
            Command::ImplicitlyWait => "implicitlyWait",
            Command::SetScriptTimeout => "setScriptTimeout",
            Command::GetTimeouts => "getTimeouts",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == name)
    }

    fn handler(self, config: &CommandConfig) -> Box<dyn CommandHandler> {
        match self {
            Command::FindElement => Box::new(FindElementHandler::new(config.poll_interval())),
            Command::FindElements => Box::new(FindElementsHandler::new(config.poll_interval())),
            Command::SetTimeout => Box::new(SetTimeoutHandler),
            Command::ImplicitlyWait => Box::new(ImplicitlyWaitHandler),
            Command::SetScriptTimeout => Box::new(SetScriptTimeoutHandler),
            Command::GetTimeouts => Box::new(GetTimeoutsHandler),
        }
    }
}

/// Maps command names onto their handlers.
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// A registry holding every [`Command`].
    pub fn new(config: &CommandConfig) -> CommandRegistry {
        let handlers = Command::ALL
            .into_iter()
            .map(|command| (command.name().to_owned(), command.handler(config)))
            .collect();
        CommandRegistry { handlers }
    }

    /// Adds a handler for `name`, returning the one it replaces.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        handler: Box<dyn CommandHandler>,
    ) -> Option<Box<dyn CommandHandler>> {
        self.handlers.insert(name.into(), handler)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn execute(
        &self,
        name: &str,
        environment: &mut CommandEnvironment,
        parameters: &Parameters,
    ) -> Response {
        info!("Session {}: {}", environment.session_id(), name);
        match self.handlers.get(name) {
            Some(handler) => handler.execute(environment, parameters),
            None => Response::error(
                StatusCode::UnknownCommand,
                format!("Command not implemented: {}", name),
            ),
        }
    }
}
