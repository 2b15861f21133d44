use crate::domain::constants::DOC_EXTENSION;
use crate::domain::models::{Alias, Document};
use crate::error::LocateError;
use crate::services::config::{check_root, load_aliases};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolves queries (aliases or relative paths) to rule documents under a root.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
    aliases: Vec<Alias>,
}

impl Locator {
    fn new(root: PathBuf, aliases: Vec<Alias>) -> Self {
        Self { root, aliases }
    }

    /// Check the root and load its aliases.
    pub fn open(root: PathBuf) -> Result<Self, LocateError> {
        check_root(&root)?;
        let aliases = load_aliases(&root)?;
        Ok(Self::new(root, aliases))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    fn alias(&self, keyword: &str) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.keyword == keyword)
    }

    /// Relative path of the document `query` names, if any.
    ///
    /// Aliases are checked first. A query that is not an alias is tried as a
    /// path, then as the same path with `.md` appended.
    fn resolve_path(&self, query: &str) -> Option<String> {
        if let Some(alias) = self.alias(query) {
            debug!(keyword = %alias.keyword, target = %alias.target, "alias match");
            return self.existing_file(&alias.target);
        }

        if let Some(found) = self.existing_file(query) {
            return Some(found);
        }
        self.existing_file(&format!("{}.{}", query, DOC_EXTENSION))
    }

    /// Resolve and read the document. `Ok(None)` means nothing matched.
    pub fn resolve(&self, query: &str) -> Result<Option<Document>, LocateError> {
        let Some(rel) = self.resolve_path(query) else {
            debug!(query, "no document matched");
            return Ok(None);
        };
        let full = self.root.join(&rel);
        let bytes = std::fs::read(&full).map_err(|source| LocateError::Read {
            path: full.clone(),
            source,
        })?;
        Ok(Some(Document {
            query: query.to_string(),
            path: rel,
            content: String::from_utf8_lossy(&bytes).into_owned(),
            bytes,
        }))
    }

    fn existing_file(&self, candidate: &str) -> Option<String> {
        let rel = normalize_relative(candidate)?;
        let full = self.root.join(&rel);
        if full.is_file() {
            debug!(path = %rel, "resolved");
            Some(rel)
        } else {
            None
        }
    }
}

/// Normalize a user-supplied path to a slash-separated path inside the root.
///
/// Absolute paths and `..` components never resolve.
pub fn normalize_relative(raw: &str) -> Option<String> {
    let mut parts = Vec::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?.to_string()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Locator) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("rules");
        fs::create_dir_all(root.join("ascii-art")).unwrap();
        fs::create_dir_all(root.join("coding")).unwrap();
        fs::write(root.join("ascii-art/basics.md"), "# Basics\n").unwrap();
        fs::write(root.join("ascii-art/tables.md"), "| a | b |\n").unwrap();
        fs::write(root.join("coding/notes"), "plain notes").unwrap();
        fs::write(tmp.path().join("secret.md"), "outside").unwrap();
        let locator = Locator::open(root).unwrap();
        (tmp, locator)
    }

    #[test]
    fn alias_resolves_to_target_content() {
        let (_tmp, locator) = fixture();
        let doc = locator.resolve("ascii").unwrap().expect("ascii resolves");
        assert_eq!(doc.path, "ascii-art/basics.md");
        assert_eq!(doc.content, "# Basics\n");
    }

    #[test]
    fn exact_path_and_elided_extension_resolve_to_same_file() {
        let (_tmp, locator) = fixture();
        let full = locator.resolve("ascii-art/tables.md").unwrap().unwrap();
        let short = locator.resolve("ascii-art/tables").unwrap().unwrap();
        assert_eq!(full.path, short.path);
        assert_eq!(full.content, "| a | b |\n");
        assert_eq!(full.content, short.content);
    }

    #[test]
    fn exact_path_without_extension_is_tried_first() {
        let (_tmp, locator) = fixture();
        assert_eq!(
            locator.resolve_path("coding/notes").as_deref(),
            Some("coding/notes")
        );
    }

    #[test]
    fn alias_with_missing_target_does_not_resolve() {
        let (_tmp, locator) = fixture();
        assert!(locator.resolve("tables").unwrap().is_some());
        assert!(locator.resolve("rust").unwrap().is_none());
    }

    #[test]
    fn unknown_query_resolves_to_none() {
        let (_tmp, locator) = fixture();
        assert!(locator.resolve("does-not-exist").unwrap().is_none());
        assert!(locator.resolve("").unwrap().is_none());
    }

    #[test]
    fn directories_are_not_documents() {
        let (_tmp, locator) = fixture();
        assert!(locator.resolve("ascii-art").unwrap().is_none());
    }

    #[test]
    fn paths_cannot_escape_root() {
        let (tmp, locator) = fixture();
        assert!(locator.resolve("../secret.md").unwrap().is_none());
        assert!(locator.resolve("../secret").unwrap().is_none());
        let abs = tmp.path().join("secret.md");
        assert!(locator.resolve(abs.to_str().unwrap()).unwrap().is_none());
    }

    #[test]
    fn normalize_strips_current_dir_components() {
        assert_eq!(
            normalize_relative("./ascii-art/./tables.md").as_deref(),
            Some("ascii-art/tables.md")
        );
        assert_eq!(normalize_relative("."), None);
        assert_eq!(normalize_relative("a/../b"), None);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_document_is_a_read_error() {
        use std::os::unix::fs::PermissionsExt;

        let (_tmp, locator) = fixture();
        let path = locator.root().join("ascii-art/basics.md");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can read regardless of mode bits.
        if fs::read(&path).is_ok() {
            return;
        }
        let err = locator.resolve("ascii").unwrap_err();
        assert_eq!(err.code(), "READ_FAILED");
    }

    #[test]
    fn non_utf8_document_keeps_raw_bytes() {
        let (_tmp, locator) = fixture();
        let raw = b"caf\xe9\n".to_vec();
        fs::write(locator.root().join("coding/latin1.md"), &raw).unwrap();

        let doc = locator.resolve("coding/latin1").unwrap().expect("latin1 resolves");
        assert_eq!(doc.path, "coding/latin1.md");
        assert_eq!(doc.bytes, raw);
        assert_eq!(doc.content, "caf\u{FFFD}\n");
    }
}
