//! Path helpers for registry file paths
//!
//! Registry files are addressed by forward-slash relative paths
//! (`ui/button.tsx`), while installed files are flattened to their base name
//! (`button.tsx`) inside the project's install directory.

use std::path::{Component, Path};

/// Final segment of a registry path
///
/// Accepts both `/` and `\` separators so that registries authored on
/// Windows flatten the same way.
///
/// ```text
/// "ui/button.tsx"      -> "button.tsx"
/// "hooks\\use-x.ts"    -> "use-x.ts"
/// "card.tsx"           -> "card.tsx"
/// ```
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Whether a registry path is relative and stays inside its root
pub fn is_safe_relative(path: &str) -> bool {
    let normalized = path.replace('\\', "/");
    let as_path = Path::new(&normalized);

    !normalized.is_empty()
        && !normalized.starts_with('/')
        && !base_name(&normalized).is_empty()
        && as_path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
