//! Option Translator: turns dynamic `--opt-<component>-<setting> VALUE` flags
//! into a dotted-key configuration mapping (`component.setting = VALUE`).
//!
//! The token stream is scanned directly: each `--opt-*` flag opens a run of
//! one-or-more value tokens ending at the next flag-shaped token, and
//! everything else is ignored, so stray or malformed tokens never fail the
//! parse. Flag names are normalized through a reversible escape of the
//! embedded hyphens (hyphens between word characters map to a
//! collision-resistant marker, the marker maps back to `.`), which keeps
//! multi-word segments like `slice_timing` intact.
use std::collections::BTreeMap;

use tracing::debug;

/// Fixed marker identifying dynamic pipeline-configuration flags.
pub const OPTION_PREFIX: &str = "--opt";

/// Placeholder substituted for embedded hyphens while normalizing flag
/// names, reversed afterward. Carried verbatim from the original launcher.
pub const ESCAPE_MARKER: &str = "666_____666_____666";

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True for tokens that open a dynamic option flag.
pub fn is_option_flag(token: &str) -> bool {
    token.starts_with(OPTION_PREFIX)
}

/// Flag-shaped token: leading hyphen and not a negative number. Ends a run
/// of option values.
pub fn looks_like_flag(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-')
        && match chars.next() {
            Some(c) => !c.is_ascii_digit() && c != '.',
            None => false,
        }
}

/// Replace every hyphen sitting between two word characters with
/// [`ESCAPE_MARKER`], preserving the leading flag-defining hyphens.
///
/// The scan looks at each hyphen's immediate neighbors, so adjacent
/// single-character segments (`--opt-a-b-c`) are all escaped.
pub fn escape_flag(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut escaped = String::with_capacity(token.len());
    for (i, &c) in chars.iter().enumerate() {
        let embedded = c == '-'
            && i > 0
            && i + 1 < chars.len()
            && is_word(chars[i - 1])
            && is_word(chars[i + 1]);
        if embedded {
            escaped.push_str(ESCAPE_MARKER);
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Map an escaped flag name back to its dotted form and drop the leading
/// `opt.` component contributed by the reserved prefix itself.
pub fn unescape_name(name: &str) -> String {
    let dotted = name.replace(ESCAPE_MARKER, ".");
    match dotted.strip_prefix("opt.") {
        Some(rest) => rest.to_string(),
        None => dotted,
    }
}

/// Dotted configuration key for one option flag.
fn dotted_key(flag: &str) -> String {
    unescape_name(escape_flag(flag).trim_start_matches('-'))
}

/// Translate the unrecognized remainder of the CLI into a configuration
/// mapping.
///
/// Tokens that do not open an option flag are skipped without error. Each
/// flag accepts one-or-more following values, but only the first is retained
/// (a preserved limitation of the original launcher, not an accident); a
/// repeated flag overwrites the earlier occurrence. A flag with no value at
/// all contributes nothing.
pub fn build_opt(tokens: &[String]) -> BTreeMap<String, String> {
    let mut options = BTreeMap::new();
    let mut i = 0;
    while i < tokens.len() {
        if !is_option_flag(&tokens[i]) {
            i += 1;
            continue;
        }
        let key = dotted_key(&tokens[i]);
        let mut end = i + 1;
        while end < tokens.len() && !looks_like_flag(&tokens[end]) {
            end += 1;
        }
        if end > i + 1 {
            debug!("option {} = {}", key, tokens[i + 1]);
            options.insert(key, tokens[i + 1].clone());
        }
        i = end;
    }
    options
}
