// Flag-gated debug logging
//
// Pointer movement fires at native event frequency, so nothing on that path
// logs unless its flag is switched on here.

pub const DEBUG_POINTER: bool = false; // every pointer position written to the tracker
pub const DEBUG_MOTION: bool = false; // mount transitions starting and settling

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            zoon::println!($($arg)*);
        }
    };
}

pub(crate) use debug_log;

/// Always printed; for failures that degrade the page.
pub fn log_critical(message: &str) {
    zoon::eprintln!("[CRITICAL] {}", message);
}
