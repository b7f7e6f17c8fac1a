//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i32) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv) };
    (tv.tv_sec as i64, (tv.tv_nsec / 1000) as i32)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, i32) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft: FILETIME = unsafe { std::mem::zeroed() };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let t = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (t.div_euclid(HECTONANOSECS_IN_SEC), (t.rem_euclid(HECTONANOSECS_IN_SEC) / 10) as i32)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> (i64, i32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)  => (d.as_secs() as i64, d.subsec_micros() as i32),
        Err(e) => {
            let d = e.duration();
            let micros = -(d.as_micros() as i64);
            (micros.div_euclid(1_000_000), micros.rem_euclid(1_000_000) as i32)
        }
    }
}


/// Returns the offset of the system’s local time zone from UTC, in seconds
/// east, as it applied at the given number of seconds since the Unix
/// epoch. Daylight-saving rules are the operating system’s.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
          target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly"))]
pub(crate) fn sys_local_offset(unix_seconds: i64) -> i32 {
    let time = unix_seconds as libc::time_t;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        0
    }
    else {
        tm.tm_gmtoff as i32
    }
}

/// Returns the offset of the system’s local time zone from UTC, in seconds
/// east. Windows only exposes the offset in effect *now*, so the instant
/// is ignored.
#[cfg(windows)]
pub(crate) fn sys_local_offset(_unix_seconds: i64) -> i32 {
    use winapi::um::timezoneapi::{GetTimeZoneInformation, TIME_ZONE_INFORMATION};

    const TIME_ZONE_ID_DAYLIGHT: u32 = 2;

    let mut tzi: TIME_ZONE_INFORMATION = unsafe { std::mem::zeroed() };
    let id = unsafe { GetTimeZoneInformation(&mut tzi) };

    let bias = tzi.Bias + if id == TIME_ZONE_ID_DAYLIGHT { tzi.DaylightBias } else { tzi.StandardBias };
    -(bias * 60)
}

/// Platforms without a zone database are treated as running on UTC.
#[cfg(not(any(windows, target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
              target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly")))]
pub(crate) fn sys_local_offset(_unix_seconds: i64) -> i32 {
    0
}
