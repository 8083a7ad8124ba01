//! Keypress pause that keeps a console window open.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use obd_launcher_core::Acknowledge;

/// Blocks until the user presses any key.
pub struct KeyPause;

impl KeyPause {
    pub fn new() -> Self {
        Self
    }

    fn wait_for_key(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "Press any key to continue . . . ")?;
        stdout.flush()?;

        enable_raw_mode()?;
        let result = block_until_key_press();
        disable_raw_mode()?;

        writeln!(stdout)?;
        result
    }
}

impl Acknowledge for KeyPause {
    fn wait(&mut self) {
        // Raw mode is unavailable without an interactive terminal, and
        // then there is no vanishing window to hold open anyway.
        let _ = self.wait_for_key();
    }
}

fn block_until_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
