//! Member identifier derivation from display names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that never survive into an identifier.
static NON_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid regex"));

/// Derive a member document identifier from a display name.
///
/// Lowercases and trims, deletes every character outside `[a-z0-9 ]`
/// (accented letters included, so identifiers stay ASCII), then joins
/// whitespace runs with single hyphens: `"Adrián O'Salinas!!"` becomes
/// `"adrin-osalinas"`.
///
/// Both the lineup import and the login provisioning derive IDs through
/// here, so the same display name always addresses the same member
/// document. Hyphens are treated as word separators on input, which keeps
/// the function idempotent over its own output.
pub fn normalize(display_name: &str) -> String {
    let lowered = display_name.replace('-', " ").to_lowercase();
    let stripped = NON_IDENT.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join("-")
}
