// ── OrgueBot Engine: Similarity Function ──────────────────────────────────────
//
// Ratcliff/Obershelp "gestalt" ratio: find the longest common block, recurse
// on the pieces to its left and right, and score 2·M / (|a| + |b|) where M is
// the total length of all matched blocks.
//
// Comparison is on Unicode scalar values and is case-sensitive; callers
// case-fold before calling.

use std::collections::HashMap;

/// A contiguous run of `size` equal characters at `a[a_start..]` / `b[b_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Resemblance of two strings in `[0, 1]`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = blocks(&a, &b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// All matched blocks between `a` and `b`, ordered by position in `a`.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    blocks(&a, &b)
}

fn blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        b2j.entry(*c).or_default().push(j);
    }

    let mut found = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if m.size == 0 {
            continue;
        }
        if alo < m.a_start && blo < m.b_start {
            pending.push((alo, m.a_start, blo, m.b_start));
        }
        if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
            pending.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
        }
        found.push(m);
    }
    found.sort_by_key(|m| (m.a_start, m.b_start));
    found
}

/// Longest common block inside `a[alo..ahi]` × `b[blo..bhi]`.
/// Among equally long blocks the one starting earliest in `a` wins, then
/// earliest in `b`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block { a_start: alo, b_start: blo, size: 0 };
    // j2len[j] = length of the match ending at a[i-1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best.size {
                    best = Block { a_start: i + 1 - k, b_start: j + 1 - k, size: k };
                }
            }
        }
        j2len = next;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_strings() {
        assert!(close(ratio("pedal", "pedal"), 1.0));
        assert!(close(ratio("", ""), 1.0));
    }

    #[test]
    fn test_disjoint_strings() {
        assert!(close(ratio("abc", "xyz"), 0.0));
        assert!(close(ratio("", "abc"), 0.0));
    }

    #[test]
    fn test_partial_overlap() {
        assert!(close(ratio("abcd", "bcde"), 0.75));
        // two separate blocks: "ab" and "cd"
        assert!(close(ratio("qabxcd", "abycdf"), 2.0 / 3.0));
    }

    #[test]
    fn test_accented_characters_count_once() {
        assert!(close(ratio("organo", "órgano"), 10.0 / 12.0));
        assert!(close(ratio("historia", "histórico"), 12.0 / 17.0));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(ratio("Bach", "bach") < 1.0);
    }

    #[test]
    fn test_not_symmetric_in_general_but_bounded() {
        let r = ratio("dsa", "ads");
        assert!(close(r, 2.0 / 3.0), "got {r}");
        assert!((0.0..=1.0).contains(&ratio("escribió", "quién escribió toccata fuga")));
    }

    #[test]
    fn test_matching_blocks_positions() {
        let blocks = matching_blocks("qabxcd", "abycdf");
        assert_eq!(
            blocks,
            vec![
                Block { a_start: 1, b_start: 0, size: 2 },
                Block { a_start: 4, b_start: 3, size: 2 },
            ]
        );
    }

    #[test]
    fn test_earliest_longest_block_wins() {
        // "ab" occurs twice in b; the first occurrence is matched
        let blocks = matching_blocks("ab", "xabab");
        assert_eq!(blocks, vec![Block { a_start: 0, b_start: 1, size: 2 }]);
    }
}
