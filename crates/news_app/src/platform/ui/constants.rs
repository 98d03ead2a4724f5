use std::time::Duration;

pub const APP_TITLE: &str = " Smart News ";
pub const KEY_HINTS: &str =
    " ←/→ category | 0-6 jump | r refresh | ↑/↓ scroll | q quit ";
/// How long to wait for terminal input before draining engine events.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
pub const UPDATED_AT_FORMAT: &str = "%H:%M:%S";
