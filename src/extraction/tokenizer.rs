use std::collections::HashSet;

/// Symbols that belong to a skill token only as a trailing run ("C++", "C#").
fn is_suffix_symbol(c: char) -> bool {
    c == '+' || c == '#'
}

/// Lowercased words of a text plus the exact separator text between each
/// pair of consecutive words.
///
/// Words are runs of alphanumerics. A run of `+`/`#` directly after a word
/// stays part of it when nothing alphanumeric follows, so "c++" and "c#" are
/// single words while "react+redux" and "#python" split.
///
/// Invariant: `gaps.len() == words.len().saturating_sub(1)`.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub words: Vec<String>,
    pub gaps: Vec<String>,
}

impl TokenStream {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let mut words = Vec::new();
        let mut gaps = Vec::new();
        let mut word = String::new();
        let mut gap = String::new();

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c.is_alphanumeric() {
                if word.is_empty() && !words.is_empty() {
                    gaps.push(std::mem::take(&mut gap));
                }
                word.push(c);
                i += 1;
                continue;
            }

            if is_suffix_symbol(c) && !word.is_empty() {
                let end = chars[i..]
                    .iter()
                    .position(|c| !is_suffix_symbol(*c))
                    .map_or(chars.len(), |n| i + n);
                let continues = chars.get(end).is_some_and(|c| c.is_alphanumeric());
                if !continues {
                    word.extend(&chars[i..end]);
                    words.push(std::mem::take(&mut word));
                    gap.clear();
                    i = end;
                    continue;
                }
            }

            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
                gap.clear();
            }
            gap.push(c);
            i += 1;
        }
        if !word.is_empty() {
            words.push(word);
        }

        debug_assert_eq!(gaps.len(), words.len().saturating_sub(1));
        Self { words, gaps }
    }
}

/// A skill token compiled into the same word/separator shape as the text.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    words: Vec<String>,
    gaps: Vec<String>,
}

impl SkillPattern {
    pub fn new(skill: &str) -> Self {
        let TokenStream { words, gaps } = TokenStream::new(skill);
        Self { words, gaps }
    }

    /// Whole-token match against an indexed text.
    pub fn matches(&self, text: &IndexedText) -> bool {
        match self.words.as_slice() {
            [] => false,
            [single] => text.vocabulary.contains(single),
            [first, ..] => {
                if !text.vocabulary.contains(first) {
                    return false;
                }
                let n = self.words.len();
                let stream = &text.stream;
                (0..=stream.words.len().saturating_sub(n)).any(|start| {
                    stream.words.len() >= start + n
                        && stream.words[start..start + n] == self.words[..]
                        && stream.gaps[start..start + n - 1] == self.gaps[..]
                })
            }
        }
    }
}

/// A tokenized text with a word set for O(1) single-word membership checks.
#[derive(Debug, Clone, Default)]
pub struct IndexedText {
    stream: TokenStream,
    vocabulary: HashSet<String>,
}

impl IndexedText {
    pub fn new(text: &str) -> Self {
        let stream = TokenStream::new(text);
        let vocabulary = stream.words.iter().cloned().collect();
        Self { stream, vocabulary }
    }
}
