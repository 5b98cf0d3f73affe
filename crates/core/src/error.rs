// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::editor::EditorError;
use postfix_transport_domain::DomainError;

/// Errors that can occur while compiling or applying a transport edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The declaration failed validation.
    DomainViolation(DomainError),
    /// The editor rejected a compiled edit.
    EditorFailure(EditorError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EditorFailure(err) => write!(f, "Editor failure: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<EditorError> for CoreError {
    fn from(err: EditorError) -> Self {
        Self::EditorFailure(err)
    }
}
