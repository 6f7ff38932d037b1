use glof_shell::ShellConfig;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Routes formatted events to the browser console, one call per event.
#[derive(Clone, Copy, Debug, Default)]
struct Console;

struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Installs the global subscriber. wasm32 has no system clock, so events
/// carry no timestamp.
pub fn init(config: &ShellConfig) {
    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(config.level())
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        console::warn_1(&JsValue::from_str(&format!("tracing already installed: {err}")));
    }
}
