//! Delimiter-based string tokenizer
//!
//! Splits a string on any character of a delimiter set. The tokenizer keeps a
//! cursor into the source text and hands out borrowed slices one at a time;
//! how empty tokens are treated depends on [`TokenizerMode`].

/// Delimiters that make [`TokenizerMode::Default`] behave like `strtok`
const WHITESPACE_DELIMITERS: &str = " \t\r\n";

/// How the tokenizer treats empty tokens and delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerMode {
    /// `StrTok` when every delimiter is whitespace, `RetEmpty` otherwise
    #[default]
    Default,
    /// Return empty tokens, except a trailing one after the last delimiter
    RetEmpty,
    /// Return all empty tokens, including the trailing one
    RetEmptyAll,
    /// Like `RetEmpty`, with each token carrying its terminating delimiter
    RetDelims,
    /// Never return empty tokens
    StrTok,
}

impl TokenizerMode {
    /// Resolve `Default` against a concrete delimiter set
    fn resolve(self, delimiters: &str) -> Self {
        match self {
            Self::Default => {
                if delimiters.chars().all(|c| WHITESPACE_DELIMITERS.contains(c)) {
                    Self::StrTok
                } else {
                    Self::RetEmpty
                }
            }
            other => other,
        }
    }
}

/// Stateful tokenizer over a borrowed string
#[derive(Debug, Clone)]
pub struct StringTokenizer<'a> {
    text: &'a str,
    delimiters: &'a str,
    mode: TokenizerMode,
    /// Byte offset of the next unread character
    pos: usize,
    /// Delimiter that ended the previous token, `None` at start and after the last token
    last_delimiter: Option<char>,
}

impl<'a> StringTokenizer<'a> {
    /// Create a tokenizer using [`TokenizerMode::Default`]
    pub fn new(text: &'a str, delimiters: &'a str) -> Self {
        Self::with_mode(text, delimiters, TokenizerMode::Default)
    }

    /// Create a tokenizer with an explicit mode
    pub fn with_mode(text: &'a str, delimiters: &'a str, mode: TokenizerMode) -> Self {
        Self {
            text,
            delimiters,
            mode: mode.resolve(delimiters),
            pos: 0,
            last_delimiter: None,
        }
    }

    /// Effective mode (never `Default`)
    pub fn mode(&self) -> TokenizerMode {
        self.mode
    }

    /// Byte offset of the cursor in the source text
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed part of the source text
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Delimiter that terminated the most recently returned token
    pub fn last_delimiter(&self) -> Option<char> {
        self.last_delimiter
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }

    /// Whether another call to [`next_token`](Self::next_token) yields a token
    pub fn has_more_tokens(&self) -> bool {
        if self.remainder().chars().any(|c| !self.is_delimiter(c)) {
            return true;
        }

        match self.mode {
            // Only delimiters remain: the sole empty token still owed is a
            // leading one, before anything has been consumed.
            TokenizerMode::RetEmpty | TokenizerMode::RetDelims => {
                !self.text.is_empty() && self.pos == 0
            }
            TokenizerMode::RetEmptyAll => {
                self.pos < self.text.len() || self.last_delimiter.is_some()
            }
            TokenizerMode::StrTok | TokenizerMode::Default => false,
        }
    }

    /// Return the next token and advance the cursor past it
    pub fn next_token(&mut self) -> Option<&'a str> {
        loop {
            if !self.has_more_tokens() {
                return None;
            }

            let text = self.text;
            let rest = self.remainder();
            let token = match rest.char_indices().find(|&(_, c)| self.is_delimiter(c)) {
                Some((offset, delimiter)) => {
                    let end = self.pos + offset;
                    let after = end + delimiter.len_utf8();
                    let token = if self.mode == TokenizerMode::RetDelims {
                        &text[self.pos..after]
                    } else {
                        &text[self.pos..end]
                    };
                    self.pos = after;
                    self.last_delimiter = Some(delimiter);
                    token
                }
                None => {
                    self.pos = text.len();
                    self.last_delimiter = None;
                    rest
                }
            };

            if !token.is_empty() || self.mode != TokenizerMode::StrTok {
                return Some(token);
            }
        }
    }

    /// Number of tokens left, without consuming them
    pub fn count_tokens(&self) -> usize {
        self.clone().count()
    }
}

impl<'a> Iterator for StringTokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Split `text` on `delimiters` and append every token to `dest`.
///
/// `dest` is not cleared first, so several calls accumulate into one list.
pub fn split_string(dest: &mut Vec<String>, text: &str, delimiters: &str, mode: TokenizerMode) {
    dest.extend(StringTokenizer::with_mode(text, delimiters, mode).map(str::to_owned));
}
