//! Naive line-oriented parser for the legacy v1 catalogue format.
//!
//! The v1 format looks like YAML but never was: entries are recognized by
//! a handful of known prefixes and everything else is ignored. This parser
//! deliberately reproduces that behavior instead of delegating to a real
//! YAML library, so that every historical catalogue keeps parsing exactly
//! as it always did. It has no failure mode: unrecognized lines are
//! skipped and the result is always a record per `- name:` marker.

use crate::catalog::domain::RawRecord;

/// Per-line parsing mode, carried alongside the pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Default: looking for field prefixes.
    Scanning,
    /// A `categories:` line was seen; `-` lines append labels.
    InCategories,
    /// A `description: >` or `description: |` line was seen; indented
    /// continuation lines accumulate until the indentation drops back to
    /// the marker line's level.
    InBlockDescription { reference_indent: usize },
}

/// Parse the legacy v1 text into raw records, one per `- name:` marker,
/// preserving source order.
pub fn parse_records(source: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    let mut state = ParserState::Scanning;
    let mut block_segments: Vec<String> = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();

        // A new entry marker always terminates the current record, even
        // from inside a block description.
        if trimmed.starts_with("- name:") {
            if let Some(mut record) = current.take() {
                if matches!(state, ParserState::InBlockDescription { .. }) {
                    record.description = Some(join_segments(&block_segments));
                    block_segments.clear();
                }
                records.push(record);
            }
            let name = trimmed.splitn(2, "name:").nth(1).unwrap_or("").trim();
            current = Some(RawRecord::new(name));
            state = ParserState::Scanning;
            continue;
        }

        // Prologue lines before the first entry marker carry no data.
        let Some(record) = current.as_mut() else {
            continue;
        };

        if let ParserState::InBlockDescription { reference_indent } = state {
            if trimmed.is_empty() {
                // Blank lines stay part of the block as explicit empty
                // segments, which become double spaces after joining.
                block_segments.push(String::new());
                continue;
            }
            if leading_indent(line) > reference_indent {
                block_segments.push(trimmed.to_string());
                continue;
            }
            // Indentation fell back to the marker level: close the block
            // and re-evaluate this same line under the normal rules.
            record.description = Some(join_segments(&block_segments));
            block_segments.clear();
            state = ParserState::Scanning;
        }

        if let Some(value) = trimmed.strip_prefix("publisher:") {
            record.publisher = Some(value.trim().to_string());
            state = ParserState::Scanning;
        } else if trimmed.starts_with("description: >") || trimmed.starts_with("description: |") {
            state = ParserState::InBlockDescription {
                reference_indent: leading_indent(line),
            };
            block_segments.clear();
        } else if let Some(value) = trimmed.strip_prefix("description:") {
            record.description = Some(value.trim().to_string());
            state = ParserState::Scanning;
        } else if let Some(value) = trimmed.strip_prefix("repoUrl:") {
            record.repo_url = Some(value.trim().to_string());
            state = ParserState::Scanning;
        } else if let Some(value) = trimmed.strip_prefix("websiteUrl:") {
            record.website_url = Some(value.trim().to_string());
            state = ParserState::Scanning;
        } else if trimmed.starts_with("categories:") {
            state = ParserState::InCategories;
        } else if state == ParserState::InCategories && trimmed.starts_with('-') {
            record
                .categories
                .push(trimmed.trim_start_matches('-').trim().to_string());
        }
        // Anything else is not ours; skip it without touching state.
    }

    if let Some(mut record) = current.take() {
        if matches!(state, ParserState::InBlockDescription { .. }) {
            record.description = Some(join_segments(&block_segments));
        }
        records.push(record);
    }

    records
}

fn leading_indent(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

fn join_segments(segments: &[String]) -> String {
    segments.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let source = "\
- name: Dependency-Track
  publisher: OWASP
  description: Component analysis platform
  repoUrl: https://github.com/DependencyTrack/dependency-track
  websiteUrl: https://dependencytrack.org
  categories:
    - opensource
    - analysis
";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Dependency-Track");
        assert_eq!(record.publisher.as_deref(), Some("OWASP"));
        assert_eq!(
            record.description.as_deref(),
            Some("Component analysis platform")
        );
        assert_eq!(
            record.repo_url.as_deref(),
            Some("https://github.com/DependencyTrack/dependency-track")
        );
        assert_eq!(
            record.website_url.as_deref(),
            Some("https://dependencytrack.org")
        );
        assert_eq!(record.categories, vec!["opensource", "analysis"]);
    }

    #[test]
    fn test_record_count_equals_marker_count() {
        let source = "\
- name: first
- name: second
  publisher: acme
- name: third
";
        let records = parse_records(source);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "first");
        assert_eq!(records[1].name, "second");
        assert_eq!(records[2].name, "third");
    }

    #[test]
    fn test_empty_source_yields_no_records() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("just some text\nwith no markers\n").is_empty());
    }

    #[test]
    fn test_lines_before_first_marker_are_ignored() {
        let source = "\
publisher: orphaned
categories:
  - lost
- name: tool
  publisher: acme
";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].publisher.as_deref(), Some("acme"));
        assert!(records[0].categories.is_empty());
    }

    #[test]
    fn test_record_with_only_name() {
        let records = parse_records("- name: lonely\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "lonely");
        assert!(records[0].publisher.is_none());
        assert!(records[0].description.is_none());
        assert!(records[0].categories.is_empty());
    }

    #[test]
    fn test_block_description_joined_with_single_spaces() {
        let source = "\
- name: tool
  description: >
    First line of text
    second line of text
  repoUrl: https://example.com/repo
";
        let records = parse_records(source);
        assert_eq!(
            records[0].description.as_deref(),
            Some("First line of text second line of text")
        );
        assert_eq!(
            records[0].repo_url.as_deref(),
            Some("https://example.com/repo")
        );
    }

    #[test]
    fn test_block_description_pipe_indicator() {
        let source = "\
- name: tool
  description: |
    literal style
    also accumulates
";
        let records = parse_records(source);
        assert_eq!(
            records[0].description.as_deref(),
            Some("literal style also accumulates")
        );
    }

    #[test]
    fn test_blank_line_in_block_contributes_empty_segment() {
        let source = "\
- name: tool
  description: >
    para1

    para2
";
        let records = parse_records(source);
        // Joining ["para1", "", "para2"] with single spaces gives a
        // double space at the blank join point.
        assert_eq!(records[0].description.as_deref(), Some("para1  para2"));
    }

    #[test]
    fn test_blank_line_does_not_terminate_block() {
        let source = "\
- name: tool
  description: >

    after a leading blank
";
        let records = parse_records(source);
        assert_eq!(
            records[0].description.as_deref(),
            Some("after a leading blank")
        );
    }

    #[test]
    fn test_block_exits_on_equal_indent_not_greater_or_equal() {
        // The terminating line sits at exactly the reference indent, so
        // it must end the block AND still be processed as a field line.
        let source = "\
- name: tool
  description: >
    deep enough
  publisher: acme
";
        let records = parse_records(source);
        assert_eq!(records[0].description.as_deref(), Some("deep enough"));
        assert_eq!(records[0].publisher.as_deref(), Some("acme"));
    }

    #[test]
    fn test_block_flushed_by_next_entry_marker() {
        let source = "\
- name: first
  description: >
    trailing block
- name: second
";
        let records = parse_records(source);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description.as_deref(), Some("trailing block"));
        assert!(records[1].description.is_none());
    }

    #[test]
    fn test_block_flushed_at_end_of_input() {
        let source = "\
- name: tool
  description: >
    last words";
        let records = parse_records(source);
        assert_eq!(records[0].description.as_deref(), Some("last words"));
    }

    #[test]
    fn test_plain_description_overwritten_by_block() {
        let source = "\
- name: tool
  description: short form
  description: >
    long form wins
";
        let records = parse_records(source);
        assert_eq!(records[0].description.as_deref(), Some("long form wins"));
    }

    #[test]
    fn test_categories_accumulate_across_lines() {
        let source = "\
- name: tool
  categories:
    - opensource
    - analysis
    - transform
    - analysis
";
        let records = parse_records(source);
        // Duplicates survive parsing; dedup happens in the mapper.
        assert_eq!(
            records[0].categories,
            vec!["opensource", "analysis", "transform", "analysis"]
        );
    }

    #[test]
    fn test_field_prefix_exits_categories_list() {
        let source = "\
- name: tool
  categories:
    - opensource
  repoUrl: https://example.com
    - notacategory
";
        let records = parse_records(source);
        assert_eq!(records[0].categories, vec!["opensource"]);
        assert_eq!(records[0].repo_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_dash_line_outside_categories_is_ignored() {
        let source = "\
- name: tool
  - stray list item
  categories:
    - real
";
        let records = parse_records(source);
        assert_eq!(records[0].categories, vec!["real"]);
    }

    #[test]
    fn test_unrecognized_lines_never_fail() {
        let source = "\
- name: tool
  ???: garbage
  = not even close
  publisher: acme
";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].publisher.as_deref(), Some("acme"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let source = "- name:   padded   \n  publisher:    spacey   \n";
        let records = parse_records(source);
        assert_eq!(records[0].name, "padded");
        assert_eq!(records[0].publisher.as_deref(), Some("spacey"));
    }
}
