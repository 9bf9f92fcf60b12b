//! Answer checking - lenient fuzzy matching against the expected answer.
//!
//! Both strings are normalized (trimmed, lower-cased) and compared with the
//! optimal string alignment distance, so a single swap of adjacent characters
//! counts as one edit.
//!
//! | Expected length | Allowed edits |
//! |-----------------|---------------|
//! | 0-3 | 0 (exact) |
//! | 4-6 | 1 |
//! | 7+ | 2 |

/// Trim surrounding whitespace and lower-case.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein) over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    // Row-major (n+1) x (m+1) matrix.
    let w = m + 1;
    let mut d = vec![0usize; (n + 1) * w];
    for i in 0..=n {
        d[i * w] = i;
    }
    for j in 0..=m {
        d[j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d[(i - 1) * w + j] + 1)
                .min(d[i * w + j - 1] + 1)
                .min(d[(i - 1) * w + j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[(i - 2) * w + j - 2] + 1);
            }
            d[i * w + j] = best;
        }
    }

    d[n * w + m]
}

/// Maximum edit distance tolerated for an expected answer of `len` chars.
fn allowed_edits(len: usize) -> usize {
    match len {
        0..=3 => 0,
        4..=6 => 1,
        _ => 2,
    }
}

/// Check a user's input against the expected answer.
///
/// # Examples
///
/// ```
/// use tui_quiz_core::check_answer;
///
/// assert!(check_answer("  ECHO ", "echo"));
/// assert!(check_answer("ecoh", "echo"));
/// assert!(!check_answer("bat", "cat"));
/// ```
pub fn check_answer(input: &str, expected: &str) -> bool {
    let input = normalize(input);
    let expected = normalize(expected);

    if input == expected {
        return true;
    }

    let len = expected.chars().count();
    edit_distance(&input, &expected) <= allowed_edits(len)
}
