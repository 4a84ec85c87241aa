/// Logger forwarding engine log entries to the Windows debugger output
///
/// Lines show up in the Visual Studio output pane, WinDbg or DebugView,
/// next to the messages of the D3D11 debug layer.

use kk_engine::kk::log::LogEntry;

#[cfg(windows)]
use kk_engine::kk::log::Logger;
#[cfg(windows)]
use std::ffi::CString;
#[cfg(windows)]
use windows::core::PCSTR;
#[cfg(windows)]
use windows::Win32::System::Diagnostics::Debug::OutputDebugStringA;

/// Format an entry as one debugger output line
///
/// `[SEVERITY] [source] message`, followed by `(file:line)` when the entry
/// carries a location.
pub fn format_debug_line(entry: &LogEntry) -> String {
    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] {} ({}:{})\n",
            entry.severity.label().trim_end(),
            entry.source,
            entry.message,
            file,
            line
        ),
        _ => format!(
            "[{}] [{}] {}\n",
            entry.severity.label().trim_end(),
            entry.source,
            entry.message
        ),
    }
}

/// `Logger` writing through `OutputDebugStringA`
///
/// Install with `Engine::set_logger(DebugOutputLogger)`.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugOutputLogger;

#[cfg(windows)]
impl Logger for DebugOutputLogger {
    fn log(&self, entry: &LogEntry) {
        let text = to_c_string(format_debug_line(entry));
        unsafe { OutputDebugStringA(PCSTR(text.as_ptr() as *const u8)) };
    }
}

/// Convert to a C string, cutting the text at the first interior NUL
#[cfg(windows)]
fn to_c_string(text: String) -> CString {
    CString::new(text).unwrap_or_else(|e| {
        let nul = e.nul_position();
        let mut bytes = e.into_vec();
        bytes.truncate(nul);
        CString::new(bytes).unwrap_or_default()
    })
}
