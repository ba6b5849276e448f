//! A table-driven, streaming UTF-8 decoder.
//!
//! The decoder is a 16-state finite-state machine keyed on two lookup
//! tables: a 256-entry byte classifier and a 16-entry successor-mask
//! table. A caller feeds it one byte at a time (or, via
//! [`Parser::parse_next_code_point`], a whole slice at once) and the
//! parser accepts or rejects each byte in constant time, without ever
//! buffering more than the 4 bytes of the code point in progress.
//!
//! See [`cpv`] for the companion bit-layout conversion between UTF-8
//! byte sequences and UTF-32 scalar values, and [`graph`] for a
//! diagnostic routine that renders the state machine as a graph.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classifier;
mod cpv;
mod graph;
mod parser;
mod state;

#[cfg(test)]
mod tests;

pub use cpv::{utf32_to_utf8, utf8_to_utf32, Utf32View, Utf8View, BAD_CODE_POINT};
pub use graph::{emit_graph, emit_graph_string, GraphError};
pub use parser::{ParseError, Parser, ParserErrorKind};

#[cfg(feature = "fuzzing")]
pub use classifier::BC;
#[cfg(feature = "fuzzing")]
pub use parser::step;
