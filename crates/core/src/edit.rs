// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{EditCommand, escape_tree_path};
use serde::Serialize;

/// The description of one augeas edit, ready for a [`crate::ConfigEditor`].
///
/// Compiling the same declaration twice yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledEdit {
    /// The resource title, `Postfix transport - <name>`.
    pub title: String,
    /// The file the edit applies to.
    pub incl: String,
    /// The lens used to parse `incl`.
    pub lens: String,
    /// The ordered changes, relative to [`CompiledEdit::context`].
    pub changes: Vec<EditCommand>,
    /// The class that must be applied before this edit.
    pub requires: String,
}

impl CompiledEdit {
    /// Returns the augeas tree path the changes are relative to.
    ///
    /// Only meaningful for an `incl` that starts with `/`.
    #[must_use]
    pub fn context(&self) -> String {
        format!("/files{}", escape_tree_path(&self.incl))
    }

    /// Returns the changes rendered as augeas command strings.
    #[must_use]
    pub fn change_strings(&self) -> Vec<String> {
        self.changes.iter().map(ToString::to_string).collect()
    }
}
