// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the command-line driver.

use postfix_transport::CoreError;
use thiserror::Error;

/// Errors that stop a driver run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The declarations could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The declarations are not valid JSON or not shaped like declarations.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A declaration failed to compile or apply.
    #[error("Declaration #{index} ('{name}'): {source}")]
    Compile {
        index: usize,
        name: String,
        #[source]
        source: CoreError,
    },

    /// The result could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
