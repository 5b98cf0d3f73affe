// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, Field};
use crate::validation::{is_absolute_path, validate_name, validate_quotable};
use crate::value::ParamValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The transport map edited when a declaration does not name a file.
pub const DEFAULT_TRANSPORT_FILE: &str = "/etc/postfix/transport";

/// Desired state of a transport map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ensure {
    /// The entry exists with the declared transport and next hop.
    #[default]
    Present,
    /// The entry is removed.
    Absent,
}

impl FromStr for Ensure {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(DomainError::ValueError {
                field: Field::State,
                reason: format!(
                    "state must be present or absent: $ensure must be either 'present' or 'absent', got '{s}'"
                ),
            }),
        }
    }
}

impl std::fmt::Display for Ensure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ensure {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// A filesystem path known to be absolute.
///
/// Unix paths must start with `/`. Windows drive paths (`C:\...`, `C:/...`)
/// and UNC paths (`\\server\share`) are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath {
    value: String,
}

impl AbsolutePath {
    /// Creates a new `AbsolutePath`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValueError` if `path` is not absolute.
    pub fn new(path: &str) -> Result<Self, DomainError> {
        if !is_absolute_path(path) {
            return Err(DomainError::ValueError {
                field: Field::File,
                reason: format!("file is not an absolute path: {path:?} is not an absolute path"),
            });
        }
        Ok(Self {
            value: path.to_string(),
        })
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Default for AbsolutePath {
    fn default() -> Self {
        Self {
            value: String::from(DEFAULT_TRANSPORT_FILE),
        }
    }
}

impl std::fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A raw `postfix::transport` declaration as it arrives from configuration.
///
/// Nothing here is checked yet; see [`crate::validate_declaration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportDeclaration {
    /// The resource title, used as the transport map key.
    pub name: String,
    /// The transport method (e.g. `smtp`, `relay:[host]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<ParamValue>,
    /// The next-hop host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexthop: Option<ParamValue>,
    /// The transport map file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ParamValue>,
    /// The desired state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensure: Option<ParamValue>,
}

impl TransportDeclaration {
    /// Creates a declaration with only a name; every other parameter takes its default.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            destination: None,
            nexthop: None,
            file: None,
            ensure: None,
        }
    }

    /// Sets the `destination` parameter.
    #[must_use]
    pub fn with_destination(mut self, value: impl Into<ParamValue>) -> Self {
        self.destination = Some(value.into());
        self
    }

    /// Sets the `nexthop` parameter.
    #[must_use]
    pub fn with_nexthop(mut self, value: impl Into<ParamValue>) -> Self {
        self.nexthop = Some(value.into());
        self
    }

    /// Sets the `file` parameter.
    #[must_use]
    pub fn with_file(mut self, value: impl Into<ParamValue>) -> Self {
        self.file = Some(value.into());
        self
    }

    /// Sets the `ensure` parameter.
    #[must_use]
    pub fn with_ensure(mut self, value: impl Into<ParamValue>) -> Self {
        self.ensure = Some(value.into());
        self
    }
}

/// A validated transport map entry.
///
/// Every field has passed validation, so compiling a `TransportRule`
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportRule {
    name: String,
    destination: Option<String>,
    nexthop: Option<String>,
    file: AbsolutePath,
    state: Ensure,
}

impl TransportRule {
    /// Creates a new `TransportRule`.
    ///
    /// # Arguments
    ///
    /// * `name` - The transport map key
    /// * `destination` - The transport method, if any
    /// * `nexthop` - The next-hop host, if any
    /// * `file` - The transport map file
    /// * `state` - The desired state
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, or if the name, destination,
    /// next hop or file cannot be quoted in an augeas change.
    pub fn new(
        name: &str,
        destination: Option<String>,
        nexthop: Option<String>,
        file: AbsolutePath,
        state: Ensure,
    ) -> Result<Self, DomainError> {
        validate_name(name)?;
        validate_quotable(Field::Name, name)?;
        if let Some(value) = &destination {
            validate_quotable(Field::Destination, value)?;
        }
        if let Some(value) = &nexthop {
            validate_quotable(Field::Nexthop, value)?;
        }
        validate_quotable(Field::File, file.as_str())?;

        Ok(Self {
            name: name.to_string(),
            destination,
            nexthop,
            file,
            state,
        })
    }

    /// Returns the transport map key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the transport method, if declared.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Returns the next-hop host, if declared.
    #[must_use]
    pub fn nexthop(&self) -> Option<&str> {
        self.nexthop.as_deref()
    }

    /// Returns the transport map file.
    #[must_use]
    pub const fn file(&self) -> &AbsolutePath {
        &self.file
    }

    /// Returns the desired state.
    #[must_use]
    pub const fn state(&self) -> Ensure {
        self.state
    }
}
