//! A diagnostic routine that renders the byte classifier and
//! successor-mask tables as a directed-graph description, suitable as
//! input to a standard dot-graph renderer.
//!
//! One node per state whose byte-class range is non-empty (every
//! state but the initial one), labeled with the hex byte range(s) that
//! lead into it, and one edge per (src, dst) pair drawn from the
//! successor-mask table, out of non-empty-range states only.

use core::fmt::{self, Write as _};

use thiserror::Error;

use crate::state::State;

/// Failure modes for [`emit_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The output buffer filled before the graph description was
    /// complete.
    #[error("graph output buffer is too small")]
    TruncatedOutput,
    /// Formatting failed for a reason other than running out of room.
    #[error("formatting error while emitting graph")]
    IoError,
}

/// The byte-range a state's node is labeled with: a leading run of
/// `run` bytes starting at `start`, optionally followed by a gap of
/// `skip` excluded bytes and a second run of `run2` bytes. The gap
/// lets `lb3`'s label exclude the single byte `0xed` owned by the
/// separate `lb3_ed` node, without a third state being involved.
struct RangeDescriptor {
    label: &'static str,
    start: u8,
    run: u8,
    skip: u8,
    run2: u8,
}

const fn descriptor(state: State) -> RangeDescriptor {
    match state {
        State::Asc => RangeDescriptor {
            label: "asc",
            start: 0x01,
            run: 127,
            skip: 0,
            run2: 0,
        },
        State::Lb2 => RangeDescriptor {
            label: "lb2",
            start: 0xc2,
            run: 30,
            skip: 0,
            run2: 0,
        },
        State::Lb3E0 => RangeDescriptor {
            label: "lb3_e0",
            start: 0xe0,
            run: 1,
            skip: 0,
            run2: 0,
        },
        State::Lb3 => RangeDescriptor {
            label: "lb3",
            start: 0xe1,
            run: 12,
            skip: 1,
            run2: 2,
        },
        State::Lb3Ed => RangeDescriptor {
            label: "lb3_ed",
            start: 0xed,
            run: 1,
            skip: 0,
            run2: 0,
        },
        State::Lb4F0 => RangeDescriptor {
            label: "lb4_f0",
            start: 0xf0,
            run: 1,
            skip: 0,
            run2: 0,
        },
        State::Lb4 => RangeDescriptor {
            label: "lb4",
            start: 0xf1,
            run: 3,
            skip: 0,
            run2: 0,
        },
        State::Lb4F4 => RangeDescriptor {
            label: "lb4_f4",
            start: 0xf4,
            run: 1,
            skip: 0,
            run2: 0,
        },
        State::Cb3F4 => RangeDescriptor {
            label: "cb3_f4",
            start: 0x80,
            run: 16,
            skip: 0,
            run2: 0,
        },
        State::Cb3 => RangeDescriptor {
            label: "cb3",
            start: 0x80,
            run: 64,
            skip: 0,
            run2: 0,
        },
        State::Cb3F0 => RangeDescriptor {
            label: "cb3_f0",
            start: 0x90,
            run: 48,
            skip: 0,
            run2: 0,
        },
        State::Cb2Ed => RangeDescriptor {
            label: "cb2_ed",
            start: 0x80,
            run: 32,
            skip: 0,
            run2: 0,
        },
        State::Cb2 => RangeDescriptor {
            label: "cb2",
            start: 0x80,
            run: 64,
            skip: 0,
            run2: 0,
        },
        State::Cb2E0 => RangeDescriptor {
            label: "cb2_e0",
            start: 0xa0,
            run: 32,
            skip: 0,
            run2: 0,
        },
        State::Cb1 => RangeDescriptor {
            label: "cb1",
            start: 0x80,
            run: 64,
            skip: 0,
            run2: 0,
        },
        State::Ini => RangeDescriptor {
            label: "ini",
            start: 0,
            run: 0,
            skip: 0,
            run2: 0,
        },
    }
}

fn write_range(out: &mut impl fmt::Write, d: &RangeDescriptor) -> fmt::Result {
    let lo = u16::from(d.start);
    let hi = lo + u16::from(d.run) - 1;
    write!(out, "0x{lo:02x}-0x{hi:02x}")?;
    if d.run2 > 0 {
        let second_lo = lo + u16::from(d.run) + u16::from(d.skip);
        let second_hi = second_lo + u16::from(d.run2) - 1;
        write!(out, ",0x{second_lo:02x}-0x{second_hi:02x}")?;
    }
    Ok(())
}

fn write_graph(out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "digraph utf8 {{")?;
    for state in State::ALL {
        let d = descriptor(state);
        if d.run == 0 {
            continue;
        }
        write!(out, "  {} [label=\"", d.label)?;
        write_range(out, &d)?;
        writeln!(out, "\"];")?;
    }
    for state in State::ALL {
        let d = descriptor(state);
        if d.run == 0 {
            continue;
        }
        let successors = state.successor_mask();
        for target in State::ALL {
            if successors & target.bit() != 0 {
                writeln!(out, "  {} -> {};", d.label, descriptor(target).label)?;
            }
        }
    }
    writeln!(out, "}}")
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> SliceWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.pos + bytes.len() > self.buf.len() {
            self.truncated = true;
            return Err(fmt::Error);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// Renders the state machine as a directed-graph description into
/// `out`, returning the number of bytes written.
///
/// Fails with [`GraphError::TruncatedOutput`] if `out` fills before
/// the description is complete, or [`GraphError::IoError`] if
/// formatting fails for any other reason.
pub fn emit_graph(out: &mut [u8]) -> Result<usize, GraphError> {
    let mut writer = SliceWriter::new(out);
    match write_graph(&mut writer) {
        Ok(()) => Ok(writer.pos),
        Err(_) if writer.truncated => Err(GraphError::TruncatedOutput),
        // SliceWriter only ever errs via truncation; this arm exists for
        // parity with the spec's error taxonomy should `write_graph` grow
        // a fallible step that isn't buffer-space related.
        Err(_) => Err(GraphError::IoError),
    }
}

/// Renders the state machine as a directed-graph description into a
/// freshly allocated string. A growing `String` never truncates, so
/// this never fails.
#[must_use]
pub fn emit_graph_string() -> alloc::string::String {
    let mut s = alloc::string::String::new();
    write_graph(&mut s).expect("writing to a growing String cannot fail");
    s
}
