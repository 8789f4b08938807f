// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pagination of a text segment into two-line chunks.
//!
//! The chunker is word-granular and greedy: it fills line 1, then line 2, against a host-supplied
//! line-fit oracle, and starts a new chunk with whatever words remain. The oracle must be
//! deterministic and side-effect-free; given that, the chunk list is stable for a fixed input.

use regex::RegexBuilder;

use crate::model::{Chunk, HighlightMap, HighlightSpan, StyledLine};

/// Splits `content` into two-line [`Chunk`]s using `fits_one_line` as the width oracle.
///
/// Words are whitespace-delimited and rejoined with single spaces, so consecutive spaces collapse.
/// A line accepts words greedily until the next word would no longer fit; that word rolls over to
/// the following line (or chunk). A word that does not fit even alone is still accepted, one per
/// line, so pagination terminates under any oracle, degenerate widths included.
pub fn paginate<F>(content: &str, highlight_map: &HighlightMap, fits_one_line: F) -> Vec<Chunk>
where
    F: Fn(&str) -> bool,
{
    let words: Vec<&str> = content.split_whitespace().collect();
    let mut chunks = Vec::new();
    let mut index = 0;

    while index < words.len() {
        let (line1, after_line1) = fill_line(&words, index, &fits_one_line);
        let (line2, after_line2) = fill_line(&words, after_line1, &fits_one_line);

        chunks.push(Chunk::new(
            style_line(&line1, highlight_map),
            style_line(&line2, highlight_map),
        ));
        index = after_line2;
    }

    chunks
}

/// Greedily accumulates words into one line starting at `index`.
///
/// Returns the joined line and the index of the first word not taken. The first word is always
/// taken, fitting or not.
fn fill_line<F>(words: &[&str], mut index: usize, fits_one_line: &F) -> (String, usize)
where
    F: Fn(&str) -> bool,
{
    let mut line = String::new();

    while index < words.len() {
        let candidate = if line.is_empty() {
            words[index].to_owned()
        } else {
            format!("{line} {}", words[index])
        };

        if !fits_one_line(&candidate) && !line.is_empty() {
            // The rejected word rolls over; the accepted line is final.
            break;
        }

        line = candidate;
        index += 1;
    }

    (line, index)
}

/// Applies keyword highlighting to a single finished line.
///
/// Each highlight key is matched case-insensitively on whole-word boundaries. Keys that fail to
/// compile into a pattern are skipped; styling never aborts pagination. Overlaps between keys are
/// resolved by keeping the earlier (map-order) span.
fn style_line(line: &str, highlight_map: &HighlightMap) -> StyledLine {
    if line.is_empty() || highlight_map.is_empty() {
        return StyledLine::plain(line);
    }

    let mut spans: Vec<HighlightSpan> = Vec::new();
    for (keyword, color) in highlight_map {
        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        let Ok(matcher) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };

        for found in matcher.find_iter(line) {
            let start = line[..found.start()].chars().count();
            let end = start + line[found.start()..found.end()].chars().count();
            if spans.iter().any(|span| span.start < end && start < span.end) {
                continue;
            }
            spans.push(HighlightSpan { start, end, color: *color });
        }
    }

    spans.sort_by_key(|span| span.start);
    StyledLine::new(line, spans)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ratatui::style::Color;

    use super::paginate;
    use crate::model::{Chunk, HighlightMap, HighlightSpan};

    /// Oracle that accepts any line of at most `width` chars.
    fn char_width_oracle(width: usize) -> impl Fn(&str) -> bool {
        move |line: &str| line.chars().count() <= width
    }

    fn lines(chunks: &[Chunk]) -> Vec<(String, String)> {
        chunks
            .iter()
            .map(|chunk| (chunk.line1().text().to_owned(), chunk.line2().text().to_owned()))
            .collect()
    }

    #[test]
    fn short_text_fits_one_chunk() {
        let chunks = paginate("hello world", &HighlightMap::new(), char_width_oracle(20));
        assert_eq!(lines(&chunks), vec![("hello world".to_owned(), String::new())]);
    }

    #[test]
    fn words_wrap_across_lines_and_chunks() {
        let chunks = paginate("one two three four five six", &HighlightMap::new(), char_width_oracle(9));
        assert_eq!(
            lines(&chunks),
            vec![
                ("one two".to_owned(), "three".to_owned()),
                ("four five".to_owned(), "six".to_owned()),
            ]
        );
    }

    #[test]
    fn every_produced_line_fits_unless_a_lone_word() {
        let oracle = char_width_oracle(8);
        let chunks = paginate("alpha beta gamma delta epsilon", &HighlightMap::new(), &oracle);
        for chunk in &chunks {
            for line in [chunk.line1(), chunk.line2()] {
                let fits = oracle(line.text());
                let lone_word = !line.text().contains(' ');
                assert!(fits || lone_word, "line {:?} overflows with >1 word", line.text());
            }
        }
    }

    #[test]
    fn no_word_is_dropped_or_duplicated() {
        let content = "the quick brown fox jumps over the lazy dog again and again";
        let chunks = paginate(content, &HighlightMap::new(), char_width_oracle(10));

        let mut rejoined = Vec::new();
        for chunk in &chunks {
            rejoined.extend(chunk.line1().text().split_whitespace().map(str::to_owned));
            rejoined.extend(chunk.line2().text().split_whitespace().map(str::to_owned));
        }
        let original: Vec<String> = content.split_whitespace().map(str::to_owned).collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn consecutive_spaces_collapse() {
        let chunks = paginate("a    b   c", &HighlightMap::new(), char_width_oracle(20));
        assert_eq!(lines(&chunks), vec![("a b c".to_owned(), String::new())]);
    }

    #[test]
    fn oversized_word_is_force_accepted_alone() {
        let chunks =
            paginate("hi incomprehensibilities yo", &HighlightMap::new(), char_width_oracle(6));
        assert_eq!(
            lines(&chunks),
            vec![
                ("hi".to_owned(), "incomprehensibilities".to_owned()),
                ("yo".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn degenerate_oracle_still_terminates() {
        // A zero/negative width host oracle rejects everything; one word per line.
        let chunks = paginate("a b c d e", &HighlightMap::new(), |_| false);
        assert_eq!(
            lines(&chunks),
            vec![
                ("a".to_owned(), "b".to_owned()),
                ("c".to_owned(), "d".to_owned()),
                ("e".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn empty_content_yields_no_chunks() {
        assert!(paginate("", &HighlightMap::new(), char_width_oracle(10)).is_empty());
        assert!(paginate("   ", &HighlightMap::new(), char_width_oracle(10)).is_empty());
    }

    #[test]
    fn output_is_deterministic() {
        let content = "stable output for a fixed oracle";
        let a = paginate(content, &HighlightMap::new(), char_width_oracle(12));
        let b = paginate(content, &HighlightMap::new(), char_width_oracle(12));
        assert_eq!(a, b);
    }

    #[test]
    fn highlights_match_whole_words_case_insensitively() {
        let mut map: HighlightMap = BTreeMap::new();
        map.insert("gold".to_owned(), Color::Yellow);

        let chunks = paginate("Gold and goldfish and GOLD", &map, char_width_oracle(40));
        assert_eq!(chunks.len(), 1);
        let spans = chunks[0].line1().spans();
        // "Gold" at 0..4 and "GOLD" at 22..26; "goldfish" is not a whole-word match.
        assert_eq!(
            spans,
            &[
                HighlightSpan { start: 0, end: 4, color: Color::Yellow },
                HighlightSpan { start: 22, end: 26, color: Color::Yellow },
            ]
        );
    }

    #[test]
    fn highlight_spans_use_char_indices() {
        let mut map: HighlightMap = BTreeMap::new();
        map.insert("or".to_owned(), Color::Cyan);

        let chunks = paginate("héllo ör or", &map, char_width_oracle(40));
        let spans = chunks[0].line1().spans();
        // Only the standalone ASCII "or" matches, at char offset 9.
        assert_eq!(spans, &[HighlightSpan { start: 9, end: 11, color: Color::Cyan }]);
    }

    #[test]
    fn awkward_highlight_keys_are_skipped_not_fatal() {
        let mut map: HighlightMap = BTreeMap::new();
        map.insert("(((".to_owned(), Color::Red);
        map.insert("sun".to_owned(), Color::Yellow);

        let chunks = paginate("the sun shines ((( anyway", &map, char_width_oracle(40));
        assert_eq!(chunks.len(), 1);
        let spans = chunks[0].line1().spans();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (4, 7));
    }

    #[test]
    fn overlapping_keys_keep_the_earlier_span() {
        let mut map: HighlightMap = BTreeMap::new();
        // Map order: "iron" sorts before "iron age", so the shorter span is recorded first and
        // the overlapping longer one is skipped.
        map.insert("iron age".to_owned(), Color::Red);
        map.insert("iron".to_owned(), Color::Blue);

        let chunks = paginate("the iron age began", &map, char_width_oracle(40));
        let spans = chunks[0].line1().spans();
        assert_eq!(spans, &[HighlightSpan { start: 4, end: 8, color: Color::Blue }]);
    }

    #[test]
    fn styling_applies_per_line_independently() {
        let mut map: HighlightMap = BTreeMap::new();
        map.insert("two".to_owned(), Color::Green);

        let chunks = paginate("one two", &map, char_width_oracle(3));
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].line1().spans().is_empty());
        assert_eq!(
            chunks[0].line2().spans(),
            &[HighlightSpan { start: 0, end: 3, color: Color::Green }]
        );
    }
}
