// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::augeas::PostfixAugeas;
use crate::command::{EditCommand, record_path};
use crate::edit::CompiledEdit;
use crate::error::CoreError;
use postfix_transport_domain::{Ensure, TransportDeclaration, TransportRule, validate_declaration};

/// Compiles transport declarations into augeas edits.
///
/// A compiler can only be built from a [`PostfixAugeas`] handle, so every
/// edit it produces names the lens that handle provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCompiler {
    /// The lens provider this compiler depends on.
    augeas: PostfixAugeas,
}

impl TransportCompiler {
    /// Creates a compiler backed by `augeas`.
    #[must_use]
    pub const fn new(augeas: PostfixAugeas) -> Self {
        Self { augeas }
    }

    /// Validates a declaration and compiles it.
    ///
    /// # Arguments
    ///
    /// * `declaration` - The raw declaration
    ///
    /// # Returns
    ///
    /// * `Ok(CompiledEdit)` describing the edit
    /// * `Err(CoreError::DomainViolation)` if the declaration is invalid
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter fails validation. Nothing is
    /// compiled for an invalid declaration.
    pub fn compile(&self, declaration: &TransportDeclaration) -> Result<CompiledEdit, CoreError> {
        let rule: TransportRule = validate_declaration(declaration)?;
        Ok(self.compile_rule(&rule))
    }

    /// Compiles an already validated rule.
    #[must_use]
    pub fn compile_rule(&self, rule: &TransportRule) -> CompiledEdit {
        CompiledEdit {
            title: resource_title(rule.name()),
            incl: rule.file().as_str().to_string(),
            lens: self.augeas.lens().to_string(),
            changes: transport_changes(rule),
            requires: self.augeas.class_name().to_string(),
        }
    }
}

/// Returns the resource title for the entry keyed by `name`.
#[must_use]
pub fn resource_title(name: &str) -> String {
    format!("Postfix transport - {name}")
}

/// Builds the ordered augeas changes for a rule.
///
/// An absent entry is a single removal. A present entry always sets the
/// key first, then sets or clears `transport`, then `nexthop`.
#[must_use]
pub fn transport_changes(rule: &TransportRule) -> Vec<EditCommand> {
    let record: String = record_path(rule.name());

    match rule.state() {
        Ensure::Absent => vec![EditCommand::Remove { path: record }],
        Ensure::Present => vec![
            EditCommand::Set {
                path: record.clone(),
                value: rule.name().to_string(),
            },
            field_change(&record, "transport", rule.destination()),
            field_change(&record, "nexthop", rule.nexthop()),
        ],
    }
}

fn field_change(record: &str, field: &str, value: Option<&str>) -> EditCommand {
    let path: String = format!("{record}/{field}");
    match value {
        Some(value) => EditCommand::Set {
            path,
            value: value.to_string(),
        },
        None => EditCommand::Clear { path },
    }
}
