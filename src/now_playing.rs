//! Looks up the caption of the music player's main window, which doubles as
//! the "now playing" string.

/// Executable name of the NetEase Cloud Music desktop client.
pub const TARGET_PROCESS: &str = "cloudmusic.exe";

/// A top-level window as seen by the enumeration pass. Kept separate from the
/// Win32 calls so the selection logic can be exercised with fake data.
#[derive(Debug, Clone)]
pub struct WindowSnapshot {
    /// File name of the owning process executable, e.g. `cloudmusic.exe`.
    pub process_name: String,
    /// Window caption text.
    pub title: String,
    pub visible: bool,
}

/// Per-window matching rule: a visible window owned by `target`
/// (case-insensitive) whose caption is non-empty and not one of the excluded
/// placeholder captions. Shared by the native enumeration callback and
/// [`select_title`] so the shipped path and the testable path cannot drift.
pub fn match_window(w: &WindowSnapshot, target: &str, excluded: &[String]) -> Option<String> {
    if !w.visible || !w.process_name.eq_ignore_ascii_case(target) {
        return None;
    }
    if w.title.is_empty() || excluded.iter().any(|e| *e == w.title) {
        return None;
    }
    Some(w.title.clone())
}

/// Pick the now-playing title out of a window enumeration: the first window
/// satisfying [`match_window`] wins.
pub fn select_title<I>(windows: I, target: &str, excluded: &[String]) -> Option<String>
where
    I: IntoIterator<Item = WindowSnapshot>,
{
    windows
        .into_iter()
        .find_map(|w| match_window(&w, target, excluded))
}

/// Platform capability for reading the player's window caption, resolved once
/// at startup. On anything but Windows the lookup is a permanent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    Native,
    Unsupported,
}

impl TitleSource {
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            tracing::info!("native window title source available");
            TitleSource::Native
        } else {
            tracing::info!("unsupported platform, title lookup disabled");
            TitleSource::Unsupported
        }
    }

    /// The current track title, or `None`. Every failure mode (unsupported
    /// platform, failed call, no matching window, placeholder caption)
    /// collapses to `None`.
    pub fn current_title(&self, excluded: &[String]) -> Option<String> {
        match self {
            TitleSource::Native => native::player_window_title(excluded),
            TitleSource::Unsupported => None,
        }
    }
}

#[cfg(target_os = "windows")]
mod native {
    use super::TARGET_PROCESS;
    use windows::core::PWSTR;
    use windows::Win32::Foundation::{CloseHandle, BOOL, HWND, LPARAM};
    use windows::Win32::System::Threading::{
        OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_FORMAT,
        PROCESS_QUERY_LIMITED_INFORMATION,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
        IsWindowVisible,
    };

    struct EnumCtx {
        excluded: Vec<String>,
        found: Option<String>,
    }

    unsafe extern "system" fn enum_cb(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let ctx = &mut *(lparam.0 as *mut EnumCtx);
        // Cheap skip; the matching rule checks visibility again.
        if !IsWindowVisible(hwnd).as_bool() {
            return BOOL(1);
        }
        let mut pid = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        if pid == 0 {
            return BOOL(1);
        }
        let Some(exe) = process_image_name(pid) else {
            return BOOL(1);
        };
        let snapshot = super::WindowSnapshot {
            process_name: exe,
            title: window_text(hwnd),
            visible: true,
        };
        if let Some(title) = super::match_window(&snapshot, TARGET_PROCESS, &ctx.excluded) {
            ctx.found = Some(title);
            // Stop the enumeration, the first match wins.
            return BOOL(0);
        }
        BOOL(1)
    }

    pub fn player_window_title(excluded: &[String]) -> Option<String> {
        let mut ctx = EnumCtx {
            excluded: excluded.to_vec(),
            found: None,
        };
        unsafe {
            let ctx_ptr = &mut ctx as *mut EnumCtx;
            // EnumWindows reports an error when the callback stops early.
            let _ = EnumWindows(Some(enum_cb), LPARAM(ctx_ptr as isize));
        }
        ctx.found
    }

    fn window_text(hwnd: HWND) -> String {
        unsafe {
            let len = GetWindowTextLengthW(hwnd);
            if len <= 0 {
                return String::new();
            }
            let mut buf = vec![0u16; len as usize + 1];
            let read = GetWindowTextW(hwnd, &mut buf);
            String::from_utf16_lossy(&buf[..read.max(0) as usize])
        }
    }

    /// File name of the executable backing `pid`, or `None` when the process
    /// cannot be opened or queried.
    fn process_image_name(pid: u32) -> Option<String> {
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
            let mut buf = vec![0u16; 1024];
            let mut size = buf.len() as u32;
            let res = QueryFullProcessImageNameW(
                handle,
                PROCESS_NAME_FORMAT(0),
                PWSTR(buf.as_mut_ptr()),
                &mut size,
            );
            let _ = CloseHandle(handle);
            res.ok()?;
            let path = String::from_utf16_lossy(&buf[..size as usize]);
            path.rsplit(['\\', '/']).next().map(str::to_string)
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod native {
    pub fn player_window_title(_excluded: &[String]) -> Option<String> {
        None
    }
}
