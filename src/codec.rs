//! Line codec for the worktree picker.
//!
//! `git worktree list` prints variable-width, whitespace-separated columns.
//! The picker re-tokenizes whatever it displays by whitespace, so paths or
//! branch names containing spaces would be torn apart on the way back. To
//! keep the round trip lossless, records are re-encoded with a tab between
//! fields before they reach the picker, and decoded by splitting on that
//! tab. Decoding falls back to a plain whitespace split so a line that
//! never went through `encode` still resolves to a record.

/// Reserved field separator. Never occurs inside git paths, hashes or
/// branch names.
pub const FIELD_SEPARATOR: char = '\t';

/// Second column of a bare-repository entry in `git worktree list` output.
pub const BARE_MARKER: &str = "(bare)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeRecord {
    pub path: String,
    pub sha: String,
    /// Empty for a detached HEAD.
    pub branch: String,
}

/// Parses one raw `git worktree list` line.
///
/// Columns arrive as `path sha [branch]`. Returns `None` for blank lines,
/// lines with fewer than two columns, and bare-repository entries (those
/// are not switchable worktrees and never reach the picker).
pub fn parse_listing_line(raw: &str) -> Option<WorktreeRecord> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < 2 {
        return None;
    }
    if fields[1] == BARE_MARKER {
        return None;
    }
    let branch = fields
        .get(2)
        .map(|field| strip_branch_brackets(field))
        .unwrap_or_default();
    Some(WorktreeRecord {
        path: fields[0].to_string(),
        sha: fields[1].to_string(),
        branch,
    })
}

/// Encodes a record into the picker line format.
///
/// The field order is `branch, path, sha` — deliberately not the listing
/// order, so the branch lands in the first (most useful) picker column.
pub fn encode(record: &WorktreeRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        record.branch,
        record.path,
        record.sha,
        sep = FIELD_SEPARATOR
    )
}

/// Decodes a picker selection back into a record.
///
/// Splits on the reserved separator first. A line without the separator
/// (typed by hand, or from an older space-delimited format) goes through
/// the same whitespace-collapsing split as the listing parser. Either way,
/// fewer than two fields means there is nothing usable to select.
pub fn decode(selected: &str) -> Option<WorktreeRecord> {
    let mut fields: Vec<&str> = selected.split(FIELD_SEPARATOR).collect();
    if fields.len() < 2 {
        fields = selected.split_whitespace().collect();
    }
    if fields.len() < 2 {
        return None;
    }
    Some(WorktreeRecord {
        branch: fields[0].to_string(),
        path: fields[1].to_string(),
        sha: fields.get(2).unwrap_or(&"").to_string(),
    })
}

fn strip_branch_brackets(field: &str) -> String {
    field
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(field)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, sha: &str, branch: &str) -> WorktreeRecord {
        WorktreeRecord {
            path: path.to_string(),
            sha: sha.to_string(),
            branch: branch.to_string(),
        }
    }

    #[test]
    fn test_parse_listing_line_basic() {
        let parsed = parse_listing_line("/repo/main  abc123  [master]").unwrap();
        assert_eq!(parsed, record("/repo/main", "abc123", "master"));
    }

    #[test]
    fn test_parse_listing_line_without_brackets() {
        let parsed = parse_listing_line("/repo/main  abc123  master").unwrap();
        assert_eq!(parsed, record("/repo/main", "abc123", "master"));
    }

    #[test]
    fn test_parse_listing_line_detached_head() {
        let parsed = parse_listing_line("/repo/detached  abc123").unwrap();
        assert_eq!(parsed, record("/repo/detached", "abc123", ""));
    }

    #[test]
    fn test_parse_listing_line_collapses_whitespace_runs() {
        let parsed = parse_listing_line("  /repo/x \t  def456\t [feat]  ").unwrap();
        assert_eq!(parsed, record("/repo/x", "def456", "feat"));
    }

    #[test]
    fn test_parse_listing_line_rejects_blank_and_short() {
        assert_eq!(parse_listing_line(""), None);
        assert_eq!(parse_listing_line("   "), None);
        assert_eq!(parse_listing_line("/repo/only-path"), None);
    }

    #[test]
    fn test_parse_listing_line_rejects_bare() {
        assert_eq!(parse_listing_line("/repo/bare  (bare)"), None);
    }

    #[test]
    fn test_encode_field_order() {
        let encoded = encode(&record("/repo/main", "abc123", "master"));
        assert_eq!(encoded, "master\t/repo/main\tabc123");
    }

    #[test]
    fn test_encode_empty_branch() {
        let encoded = encode(&record("/repo/detached", "abc123", ""));
        assert_eq!(encoded, "\t/repo/detached\tabc123");
    }

    #[test]
    fn test_decode_round_trip() {
        let original = record("/repo/feat", "def456", "feature-x");
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_round_trip_detached() {
        let original = record("/repo/detached", "abc123", "");
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_fallback_space_split() {
        let decoded = decode("master /repo/main abc123").unwrap();
        assert_eq!(decoded, record("/repo/main", "abc123", "master"));
    }

    #[test]
    fn test_decode_fallback_collapses_whitespace() {
        let decoded = decode("master   /repo/main").unwrap();
        assert_eq!(decoded.branch, "master");
        assert_eq!(decoded.path, "/repo/main");
        assert_eq!(decoded.sha, "");
    }

    #[test]
    fn test_decode_rejects_unusable_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("just-one-token"), None);
    }

    #[test]
    fn test_decode_two_fields_only() {
        let decoded = decode("master\t/repo/main").unwrap();
        assert_eq!(decoded, record("/repo/main", "", "master"));
    }
}
