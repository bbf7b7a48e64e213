/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use webdriver::error::ErrorStatus;

/// Numeric result codes of the JSON wire protocol.
/// <https://www.selenium.dev/documentation/legacy/json_wire_protocol/#response-status-codes>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusCode {
    Success,
    NoSuchDriver,
    NoSuchElement,
    NoSuchFrame,
    UnknownCommand,
    StaleElementReference,
    ElementNotDisplayed,
    InvalidElementState,
    UnhandledError,
    ElementNotSelectable,
    JavaScriptError,
    XPathLookupError,
    Timeout,
    NoSuchWindow,
    InvalidCookieDomain,
    UnableToSetCookie,
    UnexpectedAlertOpen,
    NoAlertPresent,
    AsyncScriptTimeout,
    InvalidElementCoordinates,
    InvalidSelector,
    SessionNotCreated,
    MoveTargetOutOfBounds,
    InvalidXPathSelector,
    InvalidXPathSelectorReturnType,
    /// A command was received without one of its required parameters. Not a
    /// numeric status on the wire; dispatchers answer it with 400 Bad Request.
    MissingParameters,
    MethodNotAllowed,
}

impl StatusCode {
    pub fn code(self) -> u32 {
        match self {
            StatusCode::Success => 0,
            StatusCode::NoSuchDriver => 6,
            StatusCode::NoSuchElement => 7,
            StatusCode::NoSuchFrame => 8,
            StatusCode::UnknownCommand => 9,
            StatusCode::StaleElementReference => 10,
            StatusCode::ElementNotDisplayed => 11,
            StatusCode::InvalidElementState => 12,
            StatusCode::UnhandledError => 13,
            StatusCode::ElementNotSelectable => 15,
            StatusCode::JavaScriptError => 17,
            StatusCode::XPathLookupError => 19,
            StatusCode::Timeout => 21,
            StatusCode::NoSuchWindow => 23,
            StatusCode::InvalidCookieDomain => 24,
            StatusCode::UnableToSetCookie => 25,
            StatusCode::UnexpectedAlertOpen => 26,
            StatusCode::NoAlertPresent => 27,
            StatusCode::AsyncScriptTimeout => 28,
            StatusCode::InvalidElementCoordinates => 29,
            StatusCode::InvalidSelector => 32,
            StatusCode::SessionNotCreated => 33,
            StatusCode::MoveTargetOutOfBounds => 34,
            StatusCode::InvalidXPathSelector => 51,
            StatusCode::InvalidXPathSelectorReturnType => 52,
            StatusCode::MissingParameters => 400,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(StatusCode::Success),
            6 => Some(StatusCode::NoSuchDriver),
            7 => Some(StatusCode::NoSuchElement),
            8 => Some(StatusCode::NoSuchFrame),
            9 => Some(StatusCode::UnknownCommand),
            10 => Some(StatusCode::StaleElementReference),
            11 => Some(StatusCode::ElementNotDisplayed),
            12 => Some(StatusCode::InvalidElementState),
            13 => Some(StatusCode::UnhandledError),
            15 => Some(StatusCode::ElementNotSelectable),
            17 => Some(StatusCode::JavaScriptError),
            19 => Some(StatusCode::XPathLookupError),
            21 => Some(StatusCode::Timeout),
            23 => Some(StatusCode::NoSuchWindow),
            24 => Some(StatusCode::InvalidCookieDomain),
            25 => Some(StatusCode::UnableToSetCookie),
            26 => Some(StatusCode::UnexpectedAlertOpen),
            27 => Some(StatusCode::NoAlertPresent),
            28 => Some(StatusCode::AsyncScriptTimeout),
            29 => Some(StatusCode::InvalidElementCoordinates),
            32 => Some(StatusCode::InvalidSelector),
            33 => Some(StatusCode::SessionNotCreated),
            34 => Some(StatusCode::MoveTargetOutOfBounds),
            51 => Some(StatusCode::InvalidXPathSelector),
            52 => Some(StatusCode::InvalidXPathSelectorReturnType),
            400 => Some(StatusCode::MissingParameters),
            405 => Some(StatusCode::MethodNotAllowed),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == StatusCode::Success
    }

    /// The closest W3C error for this status, or `None` for [`StatusCode::Success`].
    /// <https://w3c.github.io/webdriver/#errors>
    pub fn error_status(self) -> Option<ErrorStatus> {
        let status = match self {
            StatusCode::Success => return None,
            StatusCode::NoSuchDriver => ErrorStatus::InvalidSessionId,
            StatusCode::NoSuchElement => ErrorStatus::NoSuchElement,
            StatusCode::NoSuchFrame => ErrorStatus::NoSuchFrame,
            StatusCode::UnknownCommand => ErrorStatus::UnknownCommand,
            StatusCode::StaleElementReference => ErrorStatus::StaleElementReference,
            StatusCode::ElementNotDisplayed => ErrorStatus::ElementNotInteractable,
            StatusCode::InvalidElementState => ErrorStatus::InvalidElementState,
            StatusCode::UnhandledError => ErrorStatus::UnknownError,
            StatusCode::ElementNotSelectable => ErrorStatus::ElementNotSelectable,
            StatusCode::JavaScriptError => ErrorStatus::JavascriptError,
            StatusCode::Timeout => ErrorStatus::Timeout,
            StatusCode::NoSuchWindow => ErrorStatus::NoSuchWindow,
            StatusCode::InvalidCookieDomain => ErrorStatus::InvalidCookieDomain,
            StatusCode::UnableToSetCookie => ErrorStatus::UnableToSetCookie,
            StatusCode::UnexpectedAlertOpen => ErrorStatus::UnexpectedAlertOpen,
            StatusCode::NoAlertPresent => ErrorStatus::NoSuchAlert,
            StatusCode::AsyncScriptTimeout => ErrorStatus::ScriptTimeout,
            StatusCode::InvalidElementCoordinates => ErrorStatus::InvalidCoordinates,
            StatusCode::XPathLookupError |
            StatusCode::InvalidSelector |
            StatusCode::InvalidXPathSelector |
            StatusCode::InvalidXPathSelectorReturnType => ErrorStatus::InvalidSelector,
            StatusCode::SessionNotCreated => ErrorStatus::SessionNotCreated,
            StatusCode::MoveTargetOutOfBounds => ErrorStatus::MoveTargetOutOfBounds,
            StatusCode::MissingParameters => ErrorStatus::InvalidArgument,
            StatusCode::MethodNotAllowed => ErrorStatus::UnknownMethod,
        };
        Some(status)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?} ({})", self, self.code())
    }
}

impl Serialize for StatusCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u32::deserialize(deserializer)?;
        StatusCode::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown status code {}", code)))
    }
}
