// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod augeas;
mod command;
mod compile;
mod edit;
mod editor;
mod error;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use augeas::{LENS_CLASS, PostfixAugeas, TRANSPORT_LENS};
pub use command::{EditCommand, escape_tree_path, quote, record_path};
pub use compile::{TransportCompiler, resource_title, transport_changes};
pub use edit::CompiledEdit;
pub use editor::{AugtoolScript, ConfigEditor, EditorError, converge};
pub use error::CoreError;
pub use postfix_transport_domain::{
    DEFAULT_TRANSPORT_FILE, DomainError, Ensure, Field, ParamValue, TransportDeclaration,
    TransportRule,
};
