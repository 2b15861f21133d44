use crate::domain::constants::{ALIAS_FILE, BUILTIN_ALIASES, CONFIG_DIR, EXE_ROOT_CANDIDATES};
use crate::domain::models::{Alias, AliasFile};
use crate::error::LocateError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the rules root.
///
/// An explicit root (from `--root` or `AIRULES_ROOT`) wins. Otherwise the
/// root is discovered next to the running executable.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, LocateError> {
    let root = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from("."));
            discover_root_from(&exe_dir)
        }
    };
    check_root(&root)?;
    debug!(root = %root.display(), "using rules root");
    Ok(root)
}

/// First existing candidate under `exe_dir`, or the first candidate when none
/// exists so the caller can report where it looked.
pub fn discover_root_from(exe_dir: &Path) -> PathBuf {
    let candidates: Vec<PathBuf> = EXE_ROOT_CANDIDATES
        .iter()
        .map(|c| exe_dir.join(c))
        .collect();
    candidates
        .iter()
        .find(|c| c.is_dir())
        .cloned()
        .unwrap_or_else(|| candidates[0].clone())
}

pub fn check_root(root: &Path) -> Result<(), LocateError> {
    if !root.exists() {
        return Err(LocateError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LocateError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(())
}

pub fn builtin_aliases() -> Vec<Alias> {
    BUILTIN_ALIASES
        .iter()
        .map(|(keyword, target)| Alias {
            keyword: keyword.to_string(),
            target: target.to_string(),
        })
        .collect()
}

pub fn alias_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(ALIAS_FILE)
}

/// Built-in aliases merged with the optional per-root alias file.
///
/// File entries replace the target of a built-in keyword in place; new
/// keywords are appended in lexicographic order.
pub fn load_aliases(root: &Path) -> Result<Vec<Alias>, LocateError> {
    let mut aliases = builtin_aliases();
    let path = alias_file_path(root);
    if !path.is_file() {
        return Ok(aliases);
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| LocateError::Read {
        path: path.clone(),
        source,
    })?;
    let file: AliasFile = serde_json::from_str(&raw).map_err(|e| LocateError::AliasFile {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    debug!(count = file.aliases.len(), path = %path.display(), "loaded alias file");

    for (keyword, target) in file.aliases {
        if keyword.trim().is_empty() || target.trim().is_empty() {
            return Err(LocateError::AliasFile {
                path,
                reason: "alias keyword and target must be non-empty".to_string(),
            });
        }
        if let Some(existing) = aliases.iter_mut().find(|a| a.keyword == keyword) {
            existing.target = target;
        } else {
            aliases.push(Alias { keyword, target });
        }
    }
    Ok(aliases)
}
