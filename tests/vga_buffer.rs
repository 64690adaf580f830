//! End-to-end checks of the public driver API against in-memory backends.

use core::fmt::Write;
use tiny_vga::graphics::{GraphicsDriver, MemoryFrontBuffer, GHEIGHT, GWIDTH};
use tiny_vga::port::RecordingPorts;
use tiny_vga::vga_buffer::{StubBuffer, TextConsole, VGA_HEIGHT, VGA_WIDTH};
use tiny_vga::{ConsoleConfig, NewlineStyle, RgbColor, VgaColor};

#[test]
fn test_println_simple() {
    let mut console = TextConsole::new(StubBuffer::new(), RecordingPorts::new());
    writeln!(console, "test_println_simple output").unwrap();

    let row = console.buffer().row_chars(0);
    assert!(row.starts_with(b"test_println_simple output"));
    assert_eq!((console.cursor_row(), console.cursor_column()), (1, 0));
}

#[test]
fn test_println_many() {
    let mut console = TextConsole::new(StubBuffer::new(), RecordingPorts::new());
    for i in 0..200 {
        writeln!(console, "line {:03}", i).unwrap();
    }

    // the last line written sits just above the blank cursor row
    assert!(console.buffer().row_chars(VGA_HEIGHT - 2).starts_with(b"line 199"));
    assert!(console.buffer().row_chars(VGA_HEIGHT - 1).iter().all(|&c| c == b' '));
    assert!(console.buffer().row_chars(0).starts_with(b"line 176"));
    assert_eq!(console.cursor_row(), VGA_HEIGHT - 1);
}

#[test]
fn test_println_output_wraps_long_lines() {
    let config = ConsoleConfig::new()
        .with_colors(VgaColor::Yellow, VgaColor::Blue)
        .with_newline(NewlineStyle::PadLastCell);
    let mut console = TextConsole::with_config(StubBuffer::new(), RecordingPorts::new(), config);

    let line = [b'x'; VGA_WIDTH + 5];
    console.write_bytes(&line);
    assert_eq!(console.buffer().char_at(1, 4), b'x');
    assert_eq!(console.buffer().attr_at(1, 4), 0x1E);
    assert_eq!((console.cursor_row(), console.cursor_column()), (1, 5));
}

#[test]
fn test_frame_round_trip() {
    let mut gfx = GraphicsDriver::new(MemoryFrontBuffer::new(), RecordingPorts::new());
    gfx.enter_mode();
    gfx.rectangle(0, 0, GWIDTH, GHEIGHT, RgbColor::new(0, 0, 255)).unwrap();
    gfx.pixel(GWIDTH - 1, GHEIGHT - 1, RgbColor::white()).unwrap();
    gfx.flip();

    let front = gfx.front().pixels();
    assert_eq!(front[0], 0b001_001);
    assert_eq!(front[front.len() - 1], 0x3F);
}
