//! Definition-text tokenization.
//!
//! A token is a maximal run of separator characters or a maximal run of
//! non-separator characters. Repeated calls partition the input with no gaps
//! or overlaps: concatenating every token reconstructs the string exactly.

/// Separator characters used when none are configured: blank, comma, and
/// period, so terms at the end of a sentence still match whole tokens.
pub const DEFAULT_SEPARATORS: &str = " ,.";

/// The set of characters treated as token boundaries.
///
/// Glossary separator sets are tiny (a handful of punctuation characters),
/// so membership is a linear scan over a deduplicated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: Vec<char>,
}

impl SeparatorSet {
    /// Build a separator set from the characters of a string.
    #[must_use]
    pub fn new(chars: &str) -> Self {
        let mut set = Vec::new();
        for c in chars.chars() {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self { chars: set }
    }

    /// Whether a character is a separator.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Token classification, decided by the token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-separator characters.
    Word,
    /// A maximal run of separator characters.
    Separator,
}

/// One token of a definition: a slice of the source text plus its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    /// Whether this token is a word (candidate for term matching).
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the token starting at byte offset `position`.
///
/// Returns `None` at or past the end of input, or when `position` is not a
/// character boundary.
#[must_use]
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Option<&'a str> {
    let rest = text.get(position..)?;
    let first = rest.chars().next()?;
    let starts_in_set = separators.contains(first);

    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != starts_in_set)
        .map_or(rest.len(), |(i, _)| i);

    Some(&rest[..end])
}

/// Iterate over all tokens of `text`, in order.
#[must_use]
pub fn tokens<'a>(text: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

/// Iterator over the tokens of a string. See [`tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let text = next_token(self.text, self.position, self.separators)?;
        self.position += text.len();

        let first = text.chars().next()?;
        let kind = if self.separators.contains(first) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };

        Some(Token { text, kind })
    }
}
