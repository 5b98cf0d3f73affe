// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

/// The augeas lens that parses Postfix transport maps.
pub const TRANSPORT_LENS: &str = "Postfix_Transport.lns";

/// The configuration class that installs [`TRANSPORT_LENS`].
pub const LENS_CLASS: &str = "postfix::augeas";

/// Handle on the installed Postfix augeas lenses.
///
/// Holding one is the precondition for compiling transport edits: every
/// compiled edit records a dependency on the class that provides the lens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixAugeas {
    /// The transport lens identifier.
    lens: &'static str,
    /// The class that installs the lens.
    class_name: &'static str,
    /// Directory holding the lens, when it is not on augeas' default load path.
    lens_dir: Option<PathBuf>,
}

impl PostfixAugeas {
    /// Creates a handle for lenses on the default augeas load path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lens: TRANSPORT_LENS,
            class_name: LENS_CLASS,
            lens_dir: None,
        }
    }

    /// Creates a handle for lenses installed under `lens_dir`.
    #[must_use]
    pub fn with_lens_dir(lens_dir: impl Into<PathBuf>) -> Self {
        Self {
            lens_dir: Some(lens_dir.into()),
            ..Self::new()
        }
    }

    /// Returns the transport lens identifier.
    #[must_use]
    pub const fn lens(&self) -> &'static str {
        self.lens
    }

    /// Returns the lens module name (the lens identifier without `.lns`).
    #[must_use]
    pub fn module(&self) -> &'static str {
        self.lens.strip_suffix(".lns").unwrap_or(self.lens)
    }

    /// Returns the lens directory, if one was given.
    #[must_use]
    pub fn lens_dir(&self) -> Option<&Path> {
        self.lens_dir.as_deref()
    }

    /// Returns the name of the class that provides the lens.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }
}

impl Default for PostfixAugeas {
    fn default() -> Self {
        Self::new()
    }
}
