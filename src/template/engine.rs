//! Placeholder substitution engine.
//!
//! Replaces `{key}` tokens in template text with values from a
//! [`SubstitutionMap`]. The engine is a literal find-and-replace, not a
//! parser:
//!
//! - Pairs are processed in map iteration order.
//! - For each pair, only the **first** occurrence of its token in the
//!   accumulating result is replaced. A second identical token stays.
//! - A token absent from the text makes that pair a silent no-op.
//! - There is no escape syntax. Braces outside a matched token pass
//!   through untouched, and values are inserted verbatim.
//!
//! Each pair operates on the text produced by the previous one, so a
//! value that contains a later pair's token will itself be substituted.

use crate::substitutions::SubstitutionMap;

/// Render template text by substituting placeholder tokens.
///
/// For each `(key, value)` pair in `substitutions`, in iteration order,
/// replaces the first occurrence of the literal token `{key}` in the
/// accumulating result with `value`. Pure transformation; never fails.
pub fn substitute(template: &str, substitutions: &SubstitutionMap) -> String {
    let mut result = template.to_string();

    for (key, value) in substitutions.iter() {
        let token = format!("{{{}}}", key);
        if let Some(at) = result.find(&token) {
            result.replace_range(at..at + token.len(), value);
        }
    }

    result
}
