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

mod error;
mod types;
mod validation;
mod value;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, Field};
pub use types::{AbsolutePath, DEFAULT_TRANSPORT_FILE, Ensure, TransportDeclaration, TransportRule};
pub use validation::{is_absolute_path, validate_declaration, validate_name, validate_quotable};
pub use value::ParamValue;
