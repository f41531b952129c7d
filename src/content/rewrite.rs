//! Import alias rewriting
//!
//! Registry sources import shared code through fixed alias tokens
//! (`@/lib/utils`, `@/components/ui`). Projects that configure different
//! aliases get those tokens substituted on import lines. When every configured
//! alias equals its default the rewrite is the identity.
//!
//! A token only matches directly after an opening quote and only when it is
//! followed by a closing quote or a `/` (subpath import). When both a default
//! token and a configured alias match at the same site, the longer match wins:
//! a longer default token is rewritten (`@/lib/utils` with `utils = "@/lib"`),
//! a longer or equal configured alias is left alone. Applying the rewrite twice
//! therefore yields the same text as applying it once.

use std::borrow::Cow;

use crate::config::{AliasConfig, DEFAULT_COMPONENTS_ALIAS, DEFAULT_UTILS_ALIAS};

const QUOTES: [char; 3] = ['"', '\'', '`'];

struct Rule<'a> {
    from: &'a str,
    to: &'a str,
}

fn active_rules(aliases: &AliasConfig) -> Vec<Rule<'_>> {
    [
        (DEFAULT_UTILS_ALIAS, aliases.utils.as_str()),
        (DEFAULT_COMPONENTS_ALIAS, aliases.components.as_str()),
    ]
    .into_iter()
    .filter(|(from, to)| from != to)
    .map(|(from, to)| Rule { from, to })
    .collect()
}

/// Rewrite default alias tokens on import lines to the configured aliases.
///
/// Returns the input unchanged (borrowed) when nothing needed rewriting.
pub fn rewrite_imports<'a>(source: &'a str, aliases: &AliasConfig) -> Cow<'a, str> {
    let rules = active_rules(aliases);
    if rules.is_empty() {
        return Cow::Borrowed(source);
    }

    let mut changed = false;
    let mut out = String::with_capacity(source.len());

    for line in source.split_inclusive('\n') {
        if is_import_line(line) {
            let rewritten = rewrite_line(line, &rules);
            changed |= rewritten != line;
            out.push_str(&rewritten);
        } else {
            out.push_str(line);
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(source)
    }
}

fn is_import_line(line: &str) -> bool {
    line.contains("import") || line.contains(" from ") || line.contains("require(")
}

fn rewrite_line(line: &str, rules: &[Rule]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find(QUOTES) {
        // Quotes are single-byte, so splitting one byte past `pos` is safe.
        let (head, tail) = rest.split_at(pos + 1);
        out.push_str(head);

        let from = rules
            .iter()
            .filter_map(|rule| token_at(tail, rule.from).map(|len| (len, rule)))
            .max_by_key(|(len, _)| *len);
        let kept = rules.iter().filter_map(|rule| token_at(tail, rule.to)).max();

        match (from, kept) {
            (Some((len, rule)), kept) if kept.is_none_or(|kept| len > kept) => {
                out.push_str(rule.to);
                rest = &tail[len..];
            }
            (_, Some(len)) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            _ => rest = tail,
        }
    }

    out.push_str(rest);
    out
}

/// Length of `token` if `text` starts with it at an import-path boundary
fn token_at(text: &str, token: &str) -> Option<usize> {
    let after = text.strip_prefix(token)?;
    match after.chars().next() {
        Some(c) if c == '/' || QUOTES.contains(&c) => Some(token.len()),
        _ => None,
    }
}
