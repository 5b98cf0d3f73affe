// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Serialize, Serializer};

/// A single augeas change, expressed as data.
///
/// Paths are relative to the edit context (`/files<incl>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditCommand {
    /// Set the node at `path` to `value`, creating it if needed.
    Set {
        /// The node path.
        path: String,
        /// The new value.
        value: String,
    },
    /// Set the node at `path` to no value, creating it if needed.
    Clear {
        /// The node path.
        path: String,
    },
    /// Remove the node at `path` and everything below it.
    Remove {
        /// The node path.
        path: String,
    },
}

impl EditCommand {
    /// Returns the augeas verb for this command.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::Clear { .. } => "clear",
            Self::Remove { .. } => "rm",
        }
    }

    /// Returns the node path this command targets.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Set { path, .. } | Self::Clear { path } | Self::Remove { path } => path,
        }
    }

    /// Renders the command with its path made absolute under `context`.
    ///
    /// `context` must already be an escaped tree path.
    #[must_use]
    pub fn render_under(&self, context: &str) -> String {
        let path: String = format!("{}/{}", context.trim_end_matches('/'), self.path());
        render(self.verb(), &path, self)
    }
}

fn render(verb: &str, path: &str, command: &EditCommand) -> String {
    match command {
        EditCommand::Set { value, .. } => format!("{verb} {path} {}", quote(value)),
        EditCommand::Clear { .. } | EditCommand::Remove { .. } => format!("{verb} {path}"),
    }
}

impl std::fmt::Display for EditCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self.verb(), self.path(), self))
    }
}

impl Serialize for EditCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Quotes a value for use in an augeas command or path predicate.
///
/// Single quotes are used unless the value itself contains one.
#[must_use]
pub fn quote(value: &str) -> String {
    if value.contains('\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

/// Escapes a filesystem path for use as an augeas tree path.
///
/// Separators are kept; whitespace and path-expression metacharacters in
/// each segment are backslash-escaped.
#[must_use]
pub fn escape_tree_path(path: &str) -> String {
    let mut escaped: String = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_whitespace() || "[]()|=!,'\"\\*$<>+{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Returns the path of the transport map record keyed by `name`.
#[must_use]
pub fn record_path(name: &str) -> String {
    format!("pattern[. = {}]", quote(name))
}
