//! Terminal clipboard access via the OSC 52 escape sequence.
//!
//! OSC 52 asks the hosting terminal to place text on the system clipboard,
//! which works over SSH where no display server is reachable. Terminals
//! that do not support it ignore the sequence; the copy action itself
//! still succeeds from the controller's point of view.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};

pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", payload)?;
    stdout.flush()
}
