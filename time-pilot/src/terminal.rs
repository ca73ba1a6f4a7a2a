use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Raw-mode, alternate-screen terminal that restores itself when dropped.
///
/// Mouse capture is the global pointer listener behind outside-click dismissal;
/// dropping the session always releases it, on error paths too.
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalSession {
    pub fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        prepare_screen(&mut stdout, mouse)?;

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_screen(&mut io::stdout(), mouse);
                return Err(err).context("Failed to create terminal");
            }
        };
        tracing::debug!(mouse, "terminal session started");
        Ok(Self { terminal, mouse })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_screen(self.terminal.backend_mut(), self.mouse);
        let _ = self.terminal.show_cursor();
        tracing::debug!("terminal session restored");
    }
}

/// Switch to the alternate screen and optionally capture the mouse.
///
/// Raw mode must already be on. On failure everything is undone before returning.
fn prepare_screen<W: Write>(out: &mut W, mouse: bool) -> Result<()> {
    let result = execute!(out, EnterAlternateScreen)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            if mouse {
                execute!(out, EnableMouseCapture).context("Failed to enable mouse capture")
            } else {
                Ok(())
            }
        });

    if result.is_err() {
        restore_screen(out, mouse);
    }
    result
}

fn restore_screen<W: Write>(out: &mut W, mouse: bool) {
    if mouse {
        let _ = execute!(out, DisableMouseCapture);
    }
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records everything written and fails any write containing `fail_on`.
    struct FlakyTerminal {
        written: Vec<u8>,
        fail_on: &'static str,
    }

    impl Write for FlakyTerminal {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains(self.fail_on) {
                return Err(io::Error::other("terminal rejected sequence"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl FlakyTerminal {
        fn output(&self) -> String {
            String::from_utf8_lossy(&self.written).into_owned()
        }
    }

    #[test]
    fn failed_mouse_capture_leaves_alternate_screen() {
        let mut out = FlakyTerminal {
            written: Vec::new(),
            fail_on: "?1000h",
        };

        let err = prepare_screen(&mut out, true).unwrap_err();

        assert!(err.to_string().contains("mouse capture"));
        let output = out.output();
        assert!(output.contains("\x1b[?1049h"));
        assert!(output.contains("\x1b[?1000l"));
        assert!(output.contains("\x1b[?1049l"));
    }

    #[test]
    fn failed_alternate_screen_is_rolled_back() {
        let mut out = FlakyTerminal {
            written: Vec::new(),
            fail_on: "?1049h",
        };

        assert!(prepare_screen(&mut out, false).is_err());
        let output = out.output();
        assert!(output.contains("\x1b[?1049l"));
        assert!(!output.contains("?1000"));
    }

    #[test]
    fn successful_prepare_writes_nothing_to_undo() {
        let mut out = FlakyTerminal {
            written: Vec::new(),
            fail_on: "never emitted",
        };

        prepare_screen(&mut out, true).unwrap();

        let output = out.output();
        assert!(output.contains("\x1b[?1049h"));
        assert!(output.contains("\x1b[?1000h"));
        assert!(!output.contains("\x1b[?1049l"));
    }
}
