use crate::domain::constants::DOC_EXTENSION;
use crate::error::LocateError;
use crate::services::config::check_root;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DOC_EXTENSION))
        .unwrap_or(false)
}

/// Top-level README files describe the collection, not a rule.
fn is_overview(entry: &DirEntry) -> bool {
    entry.depth() == 1
        && entry
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.eq_ignore_ascii_case("readme"))
            .unwrap_or(false)
}

/// Every document under `root` as a sorted, duplicate-free list of
/// slash-separated relative paths.
///
/// Entries below the root that cannot be read are logged and skipped. An
/// unreadable root is fatal.
pub fn list_documents(root: &Path) -> Result<Vec<String>, LocateError> {
    check_root(root)?;

    let mut out = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                let message = e.to_string();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
                return Err(LocateError::Read {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_document(entry.path()) || is_overview(&entry) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let parts: Option<Vec<&str>> = rel.components().map(|c| c.as_os_str().to_str()).collect();
        match parts {
            Some(parts) => out.push(parts.join("/")),
            None => warn!(path = %rel.display(), "skipping non-utf8 path"),
        }
    }

    out.sort();
    out.dedup();
    debug!(count = out.len(), "listed documents");
    Ok(out)
}
