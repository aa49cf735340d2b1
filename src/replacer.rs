//! Registry URL prefix replacement.
//!
//! The core transformation: scan lockfile text for literal occurrences of a
//! source registry URL prefix and substitute a target prefix, leaving whatever
//! trailed the match (package path, tarball name, hash fragment) attached
//! after the new prefix.

/// Outcome of a replacement pass over lockfile text.
#[derive(Debug, Clone)]
pub struct Migration {
    /// The rewritten text.
    pub result: String,
    /// Occurrences of the source prefix found in the input.
    pub total: usize,
    /// Occurrences actually substituted. Always equals `total`.
    pub replaced: usize,
}

/// Replaces every literal occurrence of `from` in `text` with `to`.
///
/// Matching is exact and case-sensitive: plain substring search, no regex
/// semantics, no URL normalization. Occurrences are located left to right and
/// never overlap. Only the matched span is substituted; the suffix that
/// followed it in the input is copied through unchanged, so replacing
/// `https://a.example.com` with `http://b.example.org/sub` turns
/// `https://a.example.com/pkg/-/pkg-1.0.0.tgz` into
/// `http://b.example.org/sub/pkg/-/pkg-1.0.0.tgz`.
///
/// The pass runs once over the input; substituted regions are not re-scanned,
/// so a `to` that itself contains `from` cannot cascade. An empty `from`
/// matches nowhere and returns the input unchanged.
pub fn replace(text: &str, from: &str, to: &str) -> Migration {
    if from.is_empty() {
        return Migration {
            result: text.to_string(),
            total: 0,
            replaced: 0,
        };
    }

    let mut result = String::with_capacity(text.len());
    let mut total = 0;
    let mut replaced = 0;
    let mut rest = text;

    while let Some(pos) = rest.find(from) {
        total += 1;
        result.push_str(&rest[..pos]);
        result.push_str(to);
        replaced += 1;
        rest = &rest[pos + from.len()..];
    }
    result.push_str(rest);

    Migration {
        result,
        total,
        replaced,
    }
}
