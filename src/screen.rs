/// Size of the primary display in pixels.
#[cfg(target_os = "windows")]
pub fn screen_size() -> (i32, i32) {
    use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};
    let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    if w <= 0 || h <= 0 {
        (1920, 1080)
    } else {
        (w, h)
    }
}

#[cfg(not(target_os = "windows"))]
pub fn screen_size() -> (i32, i32) {
    (1920, 1080)
}

/// Highest Y position that keeps a text line on screen.
pub fn max_overlay_y(screen_height: i32) -> i32 {
    (screen_height - 20).max(0)
}

/// Clamp a requested Y position so the overlay cannot be pushed off screen.
pub fn clamp_y(y: i32, screen_height: i32) -> i32 {
    y.min(max_overlay_y(screen_height))
}
