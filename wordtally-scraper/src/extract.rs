use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, CharacterTokens, EOFToken, ParseError, TagToken, Token, TokenSink,
    TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use wordtally_core::WordFrequency;

/// Content-bearing tags: only text immediately following one of these
/// (start or end) is counted.
pub const DEFAULT_CONTENT_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "li",
    "dt",
    "dd",
    "a",
    "strong",
    "em",
    "b",
    "i",
    "blockquote",
    "figcaption",
    "td",
    "th",
    "dfn",
    "address",
    "time",
    "cite",
    "abbr",
    "details",
    "summary",
    "figure",
    "span",
];

/// Turns an HTML document into a word-frequency table.
///
/// The tokenizer walks the markup as a flat token stream. A start or end
/// tag whose name is on the allow-list consumes the token that immediately
/// follows it: a text run there is counted, any other token is swallowed
/// outright, without an allow-check of its own. Text anywhere else is
/// never scanned.
pub struct TextExtractor {
    allowed: HashSet<String>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::with_tags(DEFAULT_CONTENT_TAGS)
    }

    /// Extractor with a custom tag allow-list.
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            allowed: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Count the normalized words in `html`. Malformed or empty markup
    /// yields an empty or partial table, never an error.
    pub fn word_frequencies(&self, html: &str) -> WordFrequency {
        let sink = WordSink {
            allowed: &self.allowed,
            counts: RefCell::new(WordFrequency::new()),
            lookahead: Cell::new(false),
            counting: Cell::new(false),
            run: RefCell::new(String::new()),
        };

        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));

        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        tokenizer.sink.counts.into_inner()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Token sink that counts the text run sitting in an allowed tag's
/// lookahead position.
struct WordSink<'a> {
    allowed: &'a HashSet<String>,
    counts: RefCell<WordFrequency>,
    // The next token is an allowed tag's lookahead, to be consumed.
    lookahead: Cell<bool>,
    // A counted text run is being accumulated.
    counting: Cell<bool>,
    // Character tokens of one contiguous text run, buffered so a word
    // split across tokens (e.g. around an entity) is counted once.
    run: RefCell<String>,
}

impl WordSink<'_> {
    fn end_run(&self) {
        if self.counting.replace(false) {
            self.flush_run();
        }
    }

    fn flush_run(&self) {
        let mut run = self.run.borrow_mut();
        if run.is_empty() {
            return;
        }
        let mut counts = self.counts.borrow_mut();
        for candidate in run.split_whitespace() {
            if let Some(word) = normalize_word(candidate) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        run.clear();
    }
}

impl TokenSink for WordSink<'_> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            CharacterTokens(text) => {
                if self.lookahead.replace(false) {
                    self.counting.set(true);
                }
                if self.counting.get() {
                    self.run.borrow_mut().push_str(&text);
                }
            }
            TagToken(tag) => {
                self.end_run();
                // A tag consumed as lookahead is swallowed without an
                // allow-check of its own. Self-closing tags never have a
                // following text token, so they do not open a lookahead.
                if !self.lookahead.replace(false) {
                    self.lookahead
                        .set(!tag.self_closing && self.allowed.contains(&*tag.name));
                }
            }
            // Parse errors are recoverable noise, not markup tokens.
            ParseError(_) => {}
            EOFToken => self.end_run(),
            _ => {
                self.end_run();
                self.lookahead.set(false);
            }
        }
        TokenSinkResult::Continue
    }
}

/// Normalize one whitespace-delimited candidate: lowercase, trim
/// surrounding non-alphanumerics, then keep only purely alphabetic words.
/// Trimming tolerates digits but the final filter does not, so tokens
/// like "3rd" or "a1" are dropped.
fn normalize_word(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_string())
}
