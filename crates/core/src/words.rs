//! Word normalization and pool sanitization.
//!
//! Pool entries arrive as user-authored strings (the original lists are
//! Spanish, so accented vowels and enye are common). Everything is folded to
//! unaccented uppercase A-Z before it touches the grid, and entries that do
//! not survive the fold are dropped from the pool.

use std::fmt;

/// A word pool with nothing playable in it counts as malformed content: the
/// caller must show the error state and skip grid generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    Empty,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Empty => write!(f, "word pool contains no usable words"),
        }
    }
}

impl std::error::Error for PoolError {}

/// Fold one character to its unaccented uppercase form, or None when it has
/// no place in the grid alphabet.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' | 'Ñ' => 'N',
        'ç' | 'Ç' => 'C',
        c if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return None,
    };
    Some(folded)
}

/// Normalize a raw pool entry: trim, strip diacritics, uppercase.
///
/// Characters outside the foldable alphabet are dropped; `sanitize_pool`
/// rejects entries where that would change the word.
pub fn normalize(raw: &str) -> String {
    raw.trim().chars().filter_map(fold_char).collect()
}

/// True when the entry folds cleanly to grid letters only.
fn folds_cleanly(raw: &str) -> bool {
    raw.trim().chars().all(|c| fold_char(c).is_some())
}

/// Normalize a pool and drop unusable entries.
///
/// An entry survives when it folds cleanly to A-Z, has at least two letters,
/// and fits the grid (`max_len`). Returns `PoolError::Empty` when nothing
/// survives, which callers treat the same as a failed pool fetch.
pub fn sanitize_pool<I, S>(raw: I, max_len: usize) -> Result<Vec<String>, PoolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<String> = raw
        .into_iter()
        .filter(|w| folds_cleanly(w.as_ref()))
        .map(|w| normalize(w.as_ref()))
        .filter(|w| w.len() >= 2 && w.len() <= max_len)
        .collect();

    if words.is_empty() {
        return Err(PoolError::Empty);
    }
    Ok(words)
}
