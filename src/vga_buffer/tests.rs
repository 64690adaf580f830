// src/vga_buffer/tests.rs

use super::*;
use crate::config::{ConsoleConfig, NewlineStyle};
use crate::port::constants::{CRTC_DATA, CRTC_INDEX};
use crate::port::RecordingPorts;

type TestConsole = TextConsole<StubBuffer, RecordingPorts>;

fn console() -> TestConsole {
    TextConsole::new(StubBuffer::new(), RecordingPorts::new())
}

fn console_with(config: ConsoleConfig) -> TestConsole {
    TextConsole::with_config(StubBuffer::new(), RecordingPorts::new(), config)
}

/// Cursor index most recently written to the CRTC cursor registers.
fn hardware_cursor(ports: &RecordingPorts) -> Option<u16> {
    let writes: std::vec::Vec<(u16, u8)> = ports.writes().collect();
    let tail = writes.get(writes.len().checked_sub(4)?..)?;
    match tail {
        [(CRTC_INDEX, 0x0F), (CRTC_DATA, low), (CRTC_INDEX, 0x0E), (CRTC_DATA, high)] => {
            Some(u16::from(*high) << 8 | u16::from(*low))
        }
        _ => None,
    }
}

#[test]
fn init_blanks_every_cell_and_homes_cursor() {
    let console = console();
    assert_eq!(console.position(), Position::new());
    for row in 0..VGA_HEIGHT {
        for col in 0..VGA_WIDTH {
            assert_eq!(console.buffer().cell(row, col), 0x0720);
        }
    }
}

#[test]
fn plain_bytes_land_at_cursor_with_current_color() {
    let mut console = console();
    console.write_string("Hi");
    assert_eq!(console.buffer().char_at(0, 0), b'H');
    assert_eq!(console.buffer().char_at(0, 1), b'i');
    assert_eq!(console.buffer().attr_at(0, 0), ColorCode::normal().as_u8());
    assert_eq!(console.cursor_column(), 2);
    assert_eq!(hardware_cursor(console.ports()), Some(2));
}

#[test]
fn every_character_syncs_the_hardware_cursor() {
    let mut console = console();
    console.write_string("abc");
    assert_eq!(console.ports().writes().count(), 3 * 4);
}

#[test]
fn column_overflow_wraps_to_next_row() {
    let mut console = console();
    for _ in 0..VGA_WIDTH {
        console.write_byte(b'a');
    }
    assert_eq!(console.position(), Position { row: 1, col: 0 });
    assert_eq!(hardware_cursor(console.ports()), Some(VGA_WIDTH as u16));
}

#[test]
fn overflowing_the_screen_scrolls_once_per_extra_row() {
    let mut console = console();
    // row r is filled with letter 'a' + r
    for row in 0..VGA_HEIGHT {
        for _ in 0..VGA_WIDTH {
            console.write_byte(b'a' + row as u8);
        }
    }
    // the last char of the last row already forced one scroll
    assert_eq!(console.buffer().row_chars(0), [b'b'; VGA_WIDTH]);
    assert_eq!(console.buffer().row_chars(VGA_HEIGHT - 2), [b'a' + 24; VGA_WIDTH]);
    assert_eq!(console.buffer().row_chars(VGA_HEIGHT - 1), [b' '; VGA_WIDTH]);
    assert_eq!(console.position(), Position { row: VGA_HEIGHT - 1, col: 0 });

    console.write_string("zz");
    assert_eq!(console.buffer().char_at(VGA_HEIGHT - 1, 0), b'z');
    assert_eq!(console.buffer().char_at(VGA_HEIGHT - 1, 1), b'z');
    assert_eq!(console.buffer().row_chars(0), [b'b'; VGA_WIDTH]);
}

#[test]
fn long_output_keeps_cursor_in_bounds() {
    let mut console = console();
    let pattern = b"x\ty\x08\nabc\n\x08\x08\t";
    for _ in 0..500 {
        console.write_bytes(pattern);
        assert!(console.position().is_valid());
    }
}

#[test]
fn direct_newline_moves_to_next_row_without_writing() {
    let mut console = console();
    console.write_string("ab\ncd");
    assert_eq!(console.buffer().row_chars(0)[..3], *b"ab ");
    assert_eq!(console.buffer().char_at(0, VGA_WIDTH - 1), b' ');
    assert_eq!(console.buffer().char_at(1, 0), b'c');
    assert_eq!(console.position(), Position { row: 1, col: 2 });
}

#[test]
fn direct_newline_on_last_row_scrolls() {
    let mut console = console();
    console.set_cursor_row(VGA_HEIGHT - 1);
    console.write_string("end\n");
    assert_eq!(console.position(), Position { row: VGA_HEIGHT - 1, col: 0 });
    assert_eq!(console.buffer().row_chars(VGA_HEIGHT - 2)[..3], *b"end");
    assert_eq!(console.buffer().row_chars(VGA_HEIGHT - 1), [b' '; VGA_WIDTH]);
}

#[test]
fn padded_newline_overwrites_last_cell_of_old_line() {
    let mut console = console_with(ConsoleConfig::new().with_newline(NewlineStyle::PadLastCell));
    console.set_color(ColorCode::new(VgaColor::Yellow, VgaColor::Blue));
    console.write_string("ab\ncd");
    assert_eq!(console.buffer().char_at(1, 0), b'c');
    assert_eq!(console.position(), Position { row: 1, col: 2 });
    // the padding space is written in the current color
    assert_eq!(console.buffer().attr_at(0, VGA_WIDTH - 1), 0x1E);
}

#[test]
fn backspace_erases_previous_character() {
    let mut console = console();
    console.write_string("abc\x08");
    assert_eq!(console.position(), Position { row: 0, col: 2 });
    assert_eq!(console.buffer().char_at(0, 2), b' ');
    assert_eq!(console.buffer().char_at(0, 1), b'b');
    assert_eq!(hardware_cursor(console.ports()), Some(2));
}

#[test]
fn backspace_at_row_start_wraps_to_previous_row() {
    let mut console = console();
    console.write_string("\nq");
    console.write_string("\x08\x08");
    assert_eq!(console.position(), Position { row: 0, col: VGA_WIDTH - 1 });
}

#[test]
fn backspace_at_origin_wraps_to_last_cell() {
    let mut console = console();
    console.write_byte(BACKSPACE);
    assert_eq!(
        console.position(),
        Position { row: VGA_HEIGHT - 1, col: VGA_WIDTH - 1 }
    );
    assert_eq!(
        hardware_cursor(console.ports()),
        Some((VGA_HEIGHT * VGA_WIDTH - 1) as u16)
    );
}

#[test]
fn tab_emits_configured_number_of_spaces() {
    let mut console = console();
    console.write_string("a\tb");
    assert_eq!(console.buffer().row_chars(0)[..4], *b"a  b");

    let mut wide = console_with(ConsoleConfig::new().with_tab_width(4));
    wide.write_byte(TAB);
    assert_eq!(wide.cursor_column(), 4);
    assert_eq!(wide.ports().writes().count(), 4 * 4);
}

#[test]
fn color_changes_are_not_retroactive() {
    let mut console = console();
    console.write_byte(b'a');
    console.set_foreground(VgaColor::LightGreen);
    console.write_byte(b'b');
    console.set_background(VgaColor::Red);
    console.write_byte(b'c');

    assert_eq!(console.buffer().attr_at(0, 0), 0x07);
    assert_eq!(console.buffer().attr_at(0, 1), 0x0A);
    assert_eq!(console.buffer().attr_at(0, 2), 0x4A);
}

#[test]
fn write_colored_restores_previous_color() {
    let mut console = console();
    console.write_colored("!", ColorCode::error());
    console.write_byte(b'.');
    assert_eq!(console.buffer().attr_at(0, 0), ColorCode::error().as_u8());
    assert_eq!(console.buffer().attr_at(0, 1), ColorCode::normal().as_u8());
    assert_eq!(console.color(), ColorCode::normal());
}

#[test]
fn clear_uses_current_color_and_homes_cursor() {
    let mut console = console();
    console.write_string("text");
    console.set_color(ColorCode::panic());
    console.clear();
    assert_eq!(console.position(), Position::new());
    assert_eq!(console.buffer().cell(0, 0), 0x4F20);
    assert_eq!(console.buffer().cell(VGA_HEIGHT - 1, VGA_WIDTH - 1), 0x4F20);
    assert_eq!(hardware_cursor(console.ports()), Some(0));
}

#[test]
fn cursor_setters_reduce_out_of_range_values() {
    let mut console = console();
    console.set_cursor_row(VGA_HEIGHT + 3);
    console.set_cursor_column(VGA_WIDTH * 2 + 5);
    assert_eq!(console.position(), Position { row: 3, col: 5 });
    assert_eq!(hardware_cursor(console.ports()), Some((3 * VGA_WIDTH + 5) as u16));
}

#[test]
fn fmt_write_goes_through_the_byte_path() {
    use core::fmt::Write;
    let mut console = console();
    write!(console, "{}-{}", 4, 2).unwrap();
    assert_eq!(console.buffer().row_chars(0)[..3], *b"4-2");
}
