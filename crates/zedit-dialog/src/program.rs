#![forbid(unsafe_code)]

//! Program text serialization.
//!
//! An embedded program is a raw byte buffer using 0x0D as its line
//! terminator. The editable form is a sequence of `String` lines; each byte
//! maps to the `char` with the same scalar value (the Latin-1 embedding),
//! so control bytes and high bytes survive a trip through the text editor.
//!
//! # Round trip
//!
//! [`from_editable_lines`] ∘ [`to_editable_lines`] reproduces the original
//! buffer and length exactly whenever every 0x0D-delimited segment fits in
//! the requested width. Wider segments are hard-split into continuation
//! lines and rejoin with a terminator, the same lossy behavior the board
//! format's editors have always had.

use zedit_world::Param;

/// The program line terminator byte.
pub const LINE_BREAK: u8 = 0x0d;

/// Editable width of the program text editor.
pub const PROGRAM_EDIT_WIDTH: usize = 42;

/// Split a param's program into editable text lines no wider than
/// `line_width`.
///
/// An empty program yields a single empty line so the editor has
/// somewhere to type. The source param is not touched.
///
/// # Panics
///
/// Panics if `line_width` is 0.
#[must_use]
pub fn to_editable_lines(param: &Param, line_width: usize) -> Vec<String> {
    assert!(line_width >= 1, "line width must be >= 1");

    let mut lines = Vec::new();
    let mut current = String::new();
    // Bytes >= 0x80 become two UTF-8 bytes, so width is counted in chars.
    let mut width = 0;
    for &byte in &param.program {
        if byte == LINE_BREAK {
            lines.push(std::mem::take(&mut current));
            width = 0;
            continue;
        }
        if width >= line_width {
            // Overlong segment: hard split into a continuation line.
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(char::from(byte));
        width += 1;
    }
    lines.push(current);
    lines
}

/// Rebuild a param from editable text lines.
///
/// Lines are concatenated with [`LINE_BREAK`] between them. Only the
/// program buffer is populated; every other field is at its default, so
/// callers must copy position, direction, and data values from the
/// original tile before replacing it.
///
/// Characters above U+00FF cannot be represented in the program dialect
/// and fold to `b'?'`.
#[must_use]
pub fn from_editable_lines<S: AsRef<str>>(lines: &[S]) -> Param {
    let mut program = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            program.push(LINE_BREAK);
        }
        for c in line.as_ref().chars() {
            let scalar = u32::from(c);
            program.push(if scalar <= 0xff { scalar as u8 } else { b'?' });
        }
    }
    Param {
        program,
        ..Param::new()
    }
}
