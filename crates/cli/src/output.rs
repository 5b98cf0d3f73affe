// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading declarations and rendering compiled edits.

use crate::error::CliError;
use clap::ValueEnum;
use postfix_transport::{
    AugtoolScript, CompiledEdit, ConfigEditor, EditorError, PostfixAugeas, TransportCompiler,
    TransportDeclaration, converge,
};
use tracing::{debug, info};

/// How compiled edits are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A JSON array of `{title, incl, lens, changes, requires}` objects.
    Json,
    /// An `augtool` batch script.
    Augtool,
}

/// Collects edits so they can be written out as JSON.
#[derive(Debug, Default)]
struct CollectedEdits {
    edits: Vec<CompiledEdit>,
}

impl ConfigEditor for CollectedEdits {
    fn apply(&mut self, edit: &CompiledEdit) -> Result<(), EditorError> {
        self.edits.push(edit.clone());
        Ok(())
    }
}

/// Parses a JSON document holding one declaration or an array of them.
///
/// # Errors
///
/// Returns `CliError::Json` if the document is not valid JSON or a
/// declaration has the wrong structure.
pub fn parse_declarations(input: &str) -> Result<Vec<TransportDeclaration>, CliError> {
    let document: serde_json::Value = serde_json::from_str(input)?;
    let declarations: Vec<TransportDeclaration> = if document.is_array() {
        serde_json::from_value(document)?
    } else {
        vec![serde_json::from_value(document)?]
    };
    debug!("Parsed {} declaration(s)", declarations.len());
    Ok(declarations)
}

/// Compiles every declaration and renders the result in `format`.
///
/// Declarations are processed in order and the first failure aborts the
/// whole run, so nothing is rendered for a partially valid input.
///
/// # Errors
///
/// Returns `CliError::Compile` for the first declaration that fails.
pub fn render(
    format: Format,
    augeas: &PostfixAugeas,
    declarations: &[TransportDeclaration],
) -> Result<String, CliError> {
    let compiler: TransportCompiler = TransportCompiler::new(augeas.clone());
    info!(
        "Compiling {} declaration(s) as {:?}",
        declarations.len(),
        format
    );

    match format {
        Format::Json => {
            let mut collected: CollectedEdits = CollectedEdits::default();
            apply_all(&compiler, &mut collected, declarations)?;
            Ok(serde_json::to_string_pretty(&collected.edits)? + "\n")
        }
        Format::Augtool => {
            let mut script: AugtoolScript = AugtoolScript::new(augeas.clone());
            apply_all(&compiler, &mut script, declarations)?;
            Ok(script.render())
        }
    }
}

fn apply_all<E: ConfigEditor>(
    compiler: &TransportCompiler,
    editor: &mut E,
    declarations: &[TransportDeclaration],
) -> Result<(), CliError> {
    for (index, declaration) in declarations.iter().enumerate() {
        converge(compiler, editor, declaration).map_err(|source| CliError::Compile {
            index: index + 1,
            name: declaration.name.clone(),
            source,
        })?;
    }
    Ok(())
}
