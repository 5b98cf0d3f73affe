// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The declaration field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The resource title, used as the transport map key.
    Name,
    /// The transport method.
    Destination,
    /// The next-hop host.
    Nexthop,
    /// The transport map file.
    File,
    /// The desired state (`ensure`).
    State,
}

impl Field {
    /// Returns the field name as used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Destination => "destination",
            Self::Nexthop => "nexthop",
            Self::File => "file",
            Self::State => "state",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while validating a transport declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A parameter has the wrong shape (a sequence or hash where a string is required).
    TypeError {
        /// The offending field.
        field: Field,
        /// The rejected value, rendered as it was supplied.
        value: String,
    },
    /// A parameter has the right shape but a disallowed value.
    ValueError {
        /// The offending field.
        field: Field,
        /// What rule the value broke.
        reason: String,
    },
}

impl DomainError {
    /// Returns the field the error refers to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::TypeError { field, .. } | Self::ValueError { field, .. } => *field,
        }
    }

    /// Returns true for shape errors.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeError { .. })
    }

    /// Returns true for disallowed-value errors.
    #[must_use]
    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::ValueError { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { field, value } => {
                write!(f, "{field} must be a string: {value} is not a string")
            }
            Self::ValueError { reason, .. } => f.write_str(reason),
        }
    }
}

impl std::error::Error for DomainError {}
