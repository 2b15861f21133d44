use crate::cli::Cli;
use crate::domain::constants::{LIST_HINT, LIST_QUERY};
use crate::domain::models::{Alias, NotFoundReport, UsageReport};
use crate::error::LocateError;
use crate::services::catalog::list_documents;
use crate::services::config::{builtin_aliases, resolve_root};
use crate::services::locator::Locator;
use crate::services::output::{print_one, print_out, print_raw};
use tracing::debug;

pub fn handle_query(cli: &Cli) -> anyhow::Result<()> {
    let Some(query) = cli.query.as_deref() else {
        return print_usage(cli);
    };

    let root = resolve_root(cli.root.as_deref())?;
    if query == LIST_QUERY {
        let docs = list_documents(&root)?;
        return print_out(cli.json, &docs, |p| p.clone());
    }

    let locator = Locator::open(root)?;
    debug!(root = %locator.root().display(), query, "resolving query");
    match locator.resolve(query)? {
        Some(doc) if cli.json => print_one(true, true, doc, |d| d.content.clone()),
        Some(doc) => print_raw(&doc.bytes),
        None if cli.strict => Err(LocateError::NotFound(query.to_string()).into()),
        None => {
            let report = NotFoundReport {
                query: query.to_string(),
                message: LocateError::NotFound(query.to_string()).to_string(),
            };
            print_one(cli.json, false, report, |r| {
                format!("{}\n{}\n", r.message, LIST_HINT)
            })
        }
    }
}

/// Usage lists the root's aliases when a root is available, the built-ins
/// when there is no root at all. A root with a broken alias file is an error.
fn print_usage(cli: &Cli) -> anyhow::Result<()> {
    let aliases = match resolve_root(cli.root.as_deref()).and_then(Locator::open) {
        Ok(locator) => locator.aliases().to_vec(),
        Err(e @ (LocateError::RootMissing(_) | LocateError::RootNotDirectory(_))) => {
            debug!(error = %e, "no usable rules root; showing built-in aliases");
            builtin_aliases()
        }
        Err(e) => return Err(e.into()),
    };
    let report = UsageReport { aliases };
    print_one(cli.json, true, report, |r| usage_text(&r.aliases))
}

pub fn usage_text(aliases: &[Alias]) -> String {
    let width = aliases.iter().map(|a| a.keyword.len()).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str("Usage: airules [OPTIONS] [QUERY]\n\n");
    out.push_str("Print a rule document by alias or relative path.\n\n");
    out.push_str("Aliases:\n");
    for a in aliases {
        out.push_str(&format!("  {:<width$}  {}\n", a.keyword, a.target, width = width));
    }
    out.push_str("\nOther queries:\n");
    out.push_str("  list          print every document path\n");
    out.push_str("  <path>        print <path> or <path>.md relative to the rules root\n");
    out
}
