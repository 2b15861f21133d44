/// Reserved query that prints the document catalog instead of a document.
pub const LIST_QUERY: &str = "list";

pub const DOC_EXTENSION: &str = "md";

/// Directory under the root holding per-root tool configuration.
pub const CONFIG_DIR: &str = ".airules";
pub const ALIAS_FILE: &str = "aliases.json";

pub const ROOT_ENV: &str = "AIRULES_ROOT";

/// Built-in aliases, in the order they are shown in the usage text.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("ascii", "ascii-art/basics.md"),
    ("tables", "ascii-art/tables.md"),
    ("diagrams", "ascii-art/diagrams.md"),
    ("style", "coding/style.md"),
    ("rust", "coding/rust.md"),
    ("testing", "testing/patterns.md"),
    ("ci", "ci-cd/github-actions.md"),
];

/// Candidate root locations relative to the directory holding the executable.
pub const EXE_ROOT_CANDIDATES: &[&str] = &["rules", "../rules", "../share/airules/rules"];

pub const LIST_HINT: &str = "run 'airules list' to see available documents";
