// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The file-editing side of a transport edit.
//!
//! Compilation only describes an edit. Applying it is the job of a
//! [`ConfigEditor`], which is handed in by the caller.

use crate::augeas::PostfixAugeas;
use crate::command::quote;
use crate::compile::TransportCompiler;
use crate::edit::CompiledEdit;
use crate::error::CoreError;
use postfix_transport_domain::TransportDeclaration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported by a [`ConfigEditor`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    /// The edit asks for a lens the editor cannot load.
    #[error("Lens {lens} is not available (editor provides {available})")]
    LensUnavailable { lens: String, available: String },

    /// The editor could not apply the changes.
    #[error("Failed to apply '{title}': {reason}")]
    ApplyFailed { title: String, reason: String },
}

/// Applies compiled edits to configuration files.
pub trait ConfigEditor {
    /// Applies one edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit cannot be applied.
    fn apply(&mut self, edit: &CompiledEdit) -> Result<(), EditorError>;
}

/// Compiles a declaration and hands the result to `editor`.
///
/// The editor is never called for a declaration that fails validation.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` for an invalid declaration and
/// `CoreError::EditorFailure` if the editor rejects the edit.
pub fn converge<E: ConfigEditor + ?Sized>(
    compiler: &TransportCompiler,
    editor: &mut E,
    declaration: &TransportDeclaration,
) -> Result<CompiledEdit, CoreError> {
    let edit: CompiledEdit = compiler.compile(declaration)?;
    debug!(
        "Compiled '{}' into {} change(s) against {}",
        edit.title,
        edit.changes.len(),
        edit.incl
    );

    editor.apply(&edit)?;
    info!("Applied '{}'", edit.title);

    Ok(edit)
}

/// A [`ConfigEditor`] that writes edits out as an `augtool` batch script.
///
/// Run the result with `augtool -A -f <script>` (plus `-I <dir>` when the
/// lens lives outside the default load path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugtoolScript {
    augeas: PostfixAugeas,
    files: Vec<String>,
    edits: Vec<CompiledEdit>,
}

impl AugtoolScript {
    /// Creates an empty script for lenses provided by `augeas`.
    #[must_use]
    pub const fn new(augeas: PostfixAugeas) -> Self {
        Self {
            augeas,
            files: Vec::new(),
            edits: Vec::new(),
        }
    }

    /// Returns the number of edits recorded so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns true if no edit has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Renders the script.
    ///
    /// Every file is registered with the lens and loaded once, then the
    /// changes run in the order the edits were applied, then everything is
    /// saved.
    #[must_use]
    pub fn render(&self) -> String {
        let module: &str = self.augeas.module();
        let mut lines: Vec<String> = Vec::new();

        match self.augeas.lens_dir() {
            Some(dir) => lines.push(format!("# augtool -A -I {} -f <script>", dir.display())),
            None => lines.push(String::from("# augtool -A -f <script>")),
        }
        lines.push(format!(
            "set /augeas/load/{module}/lens {}",
            self.augeas.lens()
        ));
        for file in &self.files {
            lines.push(format!(
                "set /augeas/load/{module}/incl[last()+1] {}",
                quote(file)
            ));
        }
        lines.push(String::from("load"));

        for edit in &self.edits {
            let context: String = edit.context();
            lines.push(format!("# {}", edit.title));
            lines.extend(
                edit.changes
                    .iter()
                    .map(|change| change.render_under(&context)),
            );
        }

        lines.push(String::from("save"));
        lines.join("\n") + "\n"
    }
}

impl ConfigEditor for AugtoolScript {
    fn apply(&mut self, edit: &CompiledEdit) -> Result<(), EditorError> {
        if edit.lens != self.augeas.lens() {
            return Err(EditorError::LensUnavailable {
                lens: edit.lens.clone(),
                available: self.augeas.lens().to_string(),
            });
        }

        // The augeas tree only mirrors Unix-style paths under /files
        if !edit.incl.starts_with('/') {
            return Err(EditorError::ApplyFailed {
                title: edit.title.clone(),
                reason: format!("{} is not a Unix path augtool can load", edit.incl),
            });
        }

        if !self.files.contains(&edit.incl) {
            self.files.push(edit.incl.clone());
        }
        self.edits.push(edit.clone());
        Ok(())
    }
}
