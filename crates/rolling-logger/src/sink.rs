//! Output sinks for formatted lines

use crate::buffer::LogLine;

/// Where a line goes besides the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Browser devtools console on wasm, stderr elsewhere
    Console,
    Stderr,
    /// Buffer only
    Silent,
}

impl Sink {
    pub fn platform_default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Sink::Console
        } else {
            Sink::Stderr
        }
    }

    pub fn write(&self, line: &LogLine) {
        match self {
            Sink::Console => console::write(line),
            Sink::Stderr => eprintln!("{}", line),
            Sink::Silent => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use tracing::Level;
    use web_sys::console;

    use crate::buffer::LogLine;

    pub fn write(line: &LogLine) {
        let text = line.to_string().into();
        match line.level {
            Level::ERROR => console::error_1(&text),
            Level::WARN => console::warn_1(&text),
            Level::INFO => console::info_1(&text),
            _ => console::debug_1(&text),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use crate::buffer::LogLine;

    pub fn write(line: &LogLine) {
        eprintln!("{}", line);
    }
}
