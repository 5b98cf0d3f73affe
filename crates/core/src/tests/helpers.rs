// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CompiledEdit, ConfigEditor, EditorError, PostfixAugeas, TransportCompiler};

pub fn create_test_compiler() -> TransportCompiler {
    TransportCompiler::new(PostfixAugeas::new())
}

/// Records every edit it is given, optionally failing instead.
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub applied: Vec<CompiledEdit>,
    pub fail_with: Option<String>,
}

impl ConfigEditor for RecordingEditor {
    fn apply(&mut self, edit: &CompiledEdit) -> Result<(), EditorError> {
        if let Some(reason) = &self.fail_with {
            return Err(EditorError::ApplyFailed {
                title: edit.title.clone(),
                reason: reason.clone(),
            });
        }
        self.applied.push(edit.clone());
        Ok(())
    }
}
