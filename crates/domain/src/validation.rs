// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, Field};
use crate::types::{AbsolutePath, Ensure, TransportDeclaration, TransportRule};
use crate::value::ParamValue;

/// Validates a raw declaration and builds the corresponding `TransportRule`.
///
/// Checks run in a fixed order and the first violation is reported:
/// name, destination, nexthop, file, state, then quoting of the values
/// that end up in augeas changes.
///
/// # Arguments
///
/// * `declaration` - The raw declaration to validate
///
/// # Returns
///
/// * `Ok(TransportRule)` if every parameter is acceptable
/// * `Err(DomainError)` describing the first violation
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - `destination`, `nexthop`, `file` or `ensure` is not a scalar string
/// - `file` is not an absolute path
/// - `ensure` is neither `present` nor `absent`
/// - A value cannot be quoted for augeas
pub fn validate_declaration(declaration: &TransportDeclaration) -> Result<TransportRule, DomainError> {
    validate_name(&declaration.name)?;

    let destination: Option<String> =
        require_string(Field::Destination, declaration.destination.as_ref())?;
    let nexthop: Option<String> = require_string(Field::Nexthop, declaration.nexthop.as_ref())?;

    let file: AbsolutePath = match require_string(Field::File, declaration.file.as_ref())? {
        Some(path) => AbsolutePath::new(&path)?,
        None => AbsolutePath::default(),
    };

    let state: Ensure = match require_string(Field::State, declaration.ensure.as_ref())? {
        Some(value) => value.parse()?,
        None => Ensure::default(),
    };

    TransportRule::new(&declaration.name, destination, nexthop, file, state)
}

/// Validates that a transport map key is usable.
///
/// # Errors
///
/// Returns `DomainError::ValueError` if the name is empty.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::ValueError {
            field: Field::Name,
            reason: String::from("name must not be empty"),
        });
    }
    Ok(())
}

/// Validates that a value can be written as a quoted augeas string.
///
/// Augeas strings are single- or double-quoted without escapes, so a value
/// may contain one kind of quote but not both, and never a line break.
///
/// # Errors
///
/// Returns `DomainError::ValueError` if the value cannot be quoted.
pub fn validate_quotable(field: Field, value: &str) -> Result<(), DomainError> {
    let has_both_quotes: bool = value.contains('\'') && value.contains('"');
    if has_both_quotes || value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(DomainError::ValueError {
            field,
            reason: format!("{field} cannot be quoted for augeas: {value:?}"),
        });
    }
    Ok(())
}

/// Returns true if `path` is absolute on Unix or Windows.
///
/// Accepted forms:
/// - `/etc/postfix/transport`
/// - `C:\postfix\transport` or `C:/postfix/transport`
/// - `\\server\share\transport`
/// - `\\?\C:\postfix\transport`
#[must_use]
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/') || is_windows_drive_path(path) || is_unc_path(path)
}

const fn is_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

fn is_windows_drive_path(path: &str) -> bool {
    let bytes: &[u8] = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && is_separator(bytes[2])
}

fn is_unc_path(path: &str) -> bool {
    let bytes: &[u8] = path.as_bytes();
    if bytes.len() < 3 || !is_separator(bytes[0]) || !is_separator(bytes[1]) {
        return false;
    }

    let rest: &str = &path[2..];

    // \\?\<something>
    if let Some(tail) = rest.strip_prefix('?') {
        let tail: &[u8] = tail.as_bytes();
        return tail.len() > 1 && is_separator(tail[0]) && !is_separator(tail[1]);
    }

    // \\server\share
    let mut segments = rest.split(|c: char| c == '/' || c == '\\');
    let server: Option<&str> = segments.next();
    let share: Option<&str> = segments.next();
    matches!((server, share), (Some(server), Some(share)) if !server.is_empty() && !share.is_empty())
}

fn require_string(field: Field, value: Option<&ParamValue>) -> Result<Option<String>, DomainError> {
    let Some(value) = value else {
        return Ok(None);
    };

    value
        .as_scalar_str()
        .map(|text| Some(text.to_string()))
        .ok_or_else(|| DomainError::TypeError {
            field,
            value: value.to_string(),
        })
}
