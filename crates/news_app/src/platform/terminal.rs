use std::io::{self, stdout};

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;

/// The terminal mode switches the UI needs.
pub trait TerminalControl {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
    fn enter_alternate_screen(&mut self) -> io::Result<()>;
    fn leave_alternate_screen(&mut self) -> io::Result<()>;
}

/// Drives the real terminal through crossterm.
pub struct CrosstermControl;

impl TerminalControl for CrosstermControl {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        stdout().execute(EnterAlternateScreen).map(|_| ())
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        stdout().execute(LeaveAlternateScreen).map(|_| ())
    }
}

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Whatever was switched on is switched off again on drop, so the shell is
/// usable after an early return, an error or a panic.
pub struct TerminalGuard<C: TerminalControl> {
    control: C,
    alternate_screen: bool,
}

impl<C: TerminalControl> TerminalGuard<C> {
    pub fn enter(mut control: C) -> io::Result<Self> {
        control.enable_raw_mode()?;
        let mut guard = Self {
            control,
            alternate_screen: false,
        };
        guard.control.enter_alternate_screen()?;
        guard.alternate_screen = true;
        Ok(guard)
    }
}

impl<C: TerminalControl> Drop for TerminalGuard<C> {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = self.control.leave_alternate_screen();
        }
        let _ = self.control.disable_raw_mode();
    }
}
