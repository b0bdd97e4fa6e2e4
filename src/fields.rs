//! Best-effort recovery of list fields.
//!
//! The export stores ingredient lists as Python-style list literals written
//! by a serializer that never escaped anything, so the field is rarely valid
//! as-is. A fixed set of repair rules turns the common damage back into a
//! JSON array; anything still unparseable degrades to an empty list. Each
//! rule trades precision for recall (an apostrophe inside a word defeats the
//! quote repair, for example), so new rules need matching test cases.

/// Why a recovery attempt produced its result. Diagnostic only; callers must
/// not branch on it to distinguish "empty" from "legitimately empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRecovery {
    Recovered,
    /// The field was absent from the row.
    Missing,
    /// Repaired text still failed to parse.
    Unparseable,
    /// Parsed, but to something other than a sequence.
    NotASequence,
}

/// Recover an ordered list of strings from a raw field. Never fails; any
/// parse problem yields an empty list. Elements are returned as-is; trimming
/// and dropping empties is the caller's job.
pub fn recover_list(raw: Option<&str>) -> Vec<String> {
    recover_list_detailed(raw).0
}

/// Same as [`recover_list`], with a reason code for tests.
pub fn recover_list_detailed(raw: Option<&str>) -> (Vec<String>, ListRecovery) {
    let raw = match raw {
        Some(s) => s,
        None => return (Vec::new(), ListRecovery::Missing),
    };

    let repaired = repair(raw);

    let value: serde_json::Value = match serde_json::from_str(&repaired) {
        Ok(v) => v,
        Err(_) => return (Vec::new(), ListRecovery::Unparseable),
    };

    match value {
        serde_json::Value::Array(items) => {
            let items = items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect();
            (items, ListRecovery::Recovered)
        }
        _ => (Vec::new(), ListRecovery::NotASequence),
    }
}

/// Apply the repair rules, in order:
/// 1. drop non-ASCII characters (mixed encodings in the source)
/// 2. drop embedded newlines and backslashes, collapse `""` to `"`
///    (undoes CSV double-escaping)
/// 3. turn every unescaped `'` into `"` (Python literal quoting to JSON)
fn repair(raw: &str) -> String {
    let ascii: String = raw.chars().filter(char::is_ascii).collect();
    let cleaned = ascii
        .replace('\n', "")
        .replace('\\', "")
        .replace("\"\"", "\"");

    let mut repaired = String::with_capacity(cleaned.len());
    let mut prev = '\0';
    for c in cleaned.chars() {
        if c == '\'' && prev != '\\' {
            repaired.push('"');
        } else {
            repaired.push(c);
        }
        prev = c;
    }
    repaired
}
