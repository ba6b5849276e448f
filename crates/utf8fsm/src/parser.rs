//! The public decoding surface: a single-owner, allocation-free
//! streaming UTF-8 parser driven by the byte classifier and the
//! successor-mask table.

use thiserror::Error;

use crate::classifier::BC;
use crate::cpv::{utf8_to_utf32, Utf8View};
use crate::state::State;

/// The outcome of a single failed [`Parser::parse_next_code_point`]
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The byte at this position cannot extend the sequence in
    /// progress. Nothing was consumed.
    #[error("illegal UTF-8 sequence at byte {0}")]
    IllegalSequenceAt(usize),
    /// The parser's internal state was corrupt before this call began.
    /// Nothing was consumed; the parser instance should be discarded.
    #[error("unrecoverable parser state")]
    UnrecoverableState,
}

/// The failure kind persisted on a [`Parser`] after a failed parse.
///
/// Unlike [`ParseError`] this carries no byte position, since it
/// describes the parser's own state rather than one particular call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParserErrorKind {
    /// Mirrors [`ParseError::IllegalSequenceAt`].
    #[error("illegal UTF-8 sequence")]
    IllegalSequence,
    /// Mirrors [`ParseError::UnrecoverableState`].
    #[error("unrecoverable parser state")]
    UnrecoverableState,
}

/// A streaming UTF-8 decoder.
///
/// Construct with [`Parser::new`] (or [`Parser::default`]), then call
/// [`Parser::parse_next_code_point`] repeatedly against a byte slice.
/// Each call consumes at most four bytes — the bytes of a single code
/// point — and leaves the slice's remaining bytes untouched. The
/// parser holds no borrow on the slice between calls and is `Copy`,
/// so checkpoint/restore is plain assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    state: u16,
    cache: [u8; 5],
    error: Option<ParserErrorKind>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Builds a parser at its initial state, expecting a leading or
    /// ASCII byte.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Ini.bit(),
            cache: [0; 5],
            error: None,
        }
    }

    /// Restores the parser to its initial state in place.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The decoder's last recorded failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<ParserErrorKind> {
        self.error
    }

    /// True when the parser is at a code-point boundary: the initial
    /// state, or just after accepting an ASCII byte or the last
    /// continuation byte of a multi-byte sequence.
    #[must_use]
    pub fn expects_leading(&self) -> bool {
        State::from_mask(self.state).is_some_and(State::is_boundary)
    }

    /// The bytes of the most recently accepted code point.
    ///
    /// Only meaningful immediately after a successful
    /// [`Parser::parse_next_code_point`] call; after a failed call the
    /// bytes accepted before the failure are still here, but
    /// incomplete.
    #[must_use]
    pub fn result_bytes(&self) -> &[u8] {
        &self.cache[1..1 + self.result_length()]
    }

    /// The length, in bytes, of the most recently accepted (or
    /// in-progress) code point.
    #[must_use]
    pub fn result_length(&self) -> usize {
        self.cache[0] as usize
    }

    /// Decodes the most recently accepted code point into its Unicode
    /// scalar value. Returns `None` if nothing has been accepted yet.
    #[must_use]
    pub fn result_scalar(&self) -> Option<char> {
        let length = self.result_length();
        if length == 0 {
            return None;
        }
        let view = Utf8View::from_bytes(self.result_bytes());
        let scalar = utf8_to_utf32(view, length as u8).scalar();
        char::from_u32(scalar)
    }

    /// Parses the next code point out of `bytes`, starting at `start`.
    ///
    /// On success, returns the index of the byte immediately after the
    /// parsed code point; [`Parser::result_bytes`] and
    /// [`Parser::result_length`] then describe it. On failure nothing
    /// is consumed: the returned error names the offending byte's
    /// position (or, for [`ParseError::UnrecoverableState`], that no
    /// byte was even examined).
    ///
    /// A byte position past the end of `bytes` — input that ends
    /// mid-sequence — is reported as
    /// [`ParseError::IllegalSequenceAt`] at that position, the same as
    /// any other illegal byte.
    pub fn parse_next_code_point(
        &mut self,
        bytes: &[u8],
        start: usize,
    ) -> Result<usize, ParseError> {
        let Some(mut current) = State::from_mask(self.state) else {
            self.error = Some(ParserErrorKind::UnrecoverableState);
            return Err(ParseError::UnrecoverableState);
        };

        let mut pos = start;
        loop {
            let Some(&byte) = bytes.get(pos) else {
                self.error = Some(ParserErrorKind::IllegalSequence);
                return Err(ParseError::IllegalSequenceAt(pos));
            };

            let next_bits = BC[byte as usize] & current.successor_mask();
            let Some(next) = State::from_mask(next_bits) else {
                self.error = Some(ParserErrorKind::IllegalSequence);
                return Err(ParseError::IllegalSequenceAt(pos));
            };

            self.accept(next, byte);
            pos += 1;
            current = next;
            self.state = current.bit();

            if current.is_boundary() {
                self.error = None;
                return Ok(pos);
            }
        }
    }

    /// Records `byte` as accepted into state `next`, updating the
    /// cache the same way regardless of whether `next` starts a new
    /// code point or extends one in progress: the cache-slot formula
    /// is self-consistent because writing the full length first and
    /// then computing `cache[0] + 1 - length` always yields `1` for a
    /// leading state.
    fn accept(&mut self, next: State, byte: u8) {
        let len = next.length();
        if next.is_leading_or_ascii() {
            self.cache = [len, 0, 0, 0, 0];
            self.cache[1] = byte;
        } else {
            let slot = (self.cache[0] + 1 - len) as usize;
            self.cache[slot] = byte;
        }
    }
}

/// The raw, cache-free transition step: given the parser's current
/// one-hot state mask and an input byte, returns the next state mask,
/// or `0` if the byte is illegal in that state.
///
/// Exposed only so the fuzz crate can drive the state machine directly
/// without the cache bookkeeping `Parser` performs on top of it.
#[cfg(feature = "fuzzing")]
#[must_use]
pub fn step(current_mask: u16, byte: u8) -> u16 {
    match State::from_mask(current_mask) {
        Some(state) => BC[byte as usize] & state.successor_mask(),
        None => 0,
    }
}
