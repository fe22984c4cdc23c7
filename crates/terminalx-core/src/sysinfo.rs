//! Synthetic system information for `date`, `cpu` and `memory`.

use rand::Rng;

use crate::config::sysinfo::{
    CPU_MAX_PERCENT, CPU_MIN_PERCENT, MEMORY_MAX_MB, MEMORY_MIN_MB, MEMORY_TOTAL_MB,
};

/// Current local time, e.g. `Fri Oct 16 2026 14:03:11 +02:00`.
pub fn current_time() -> String {
    chrono::Local::now()
        .format("%a %b %d %Y %H:%M:%S %:z")
        .to_string()
}

/// Current local time in the shorter form used by the banner.
pub fn banner_time() -> String {
    chrono::Local::now().format("%m/%d/%Y, %H:%M:%S").to_string()
}

/// Random CPU usage in `[CPU_MIN_PERCENT, CPU_MAX_PERCENT)`, two decimals.
pub fn cpu_usage<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(CPU_MIN_PERCENT..CPU_MAX_PERCENT);
    // Truncate so rounding can never reach the upper bound
    (raw * 100.0).floor() / 100.0
}

/// Random used memory in MB and the fixed total.
pub fn memory_usage<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    (rng.gen_range(MEMORY_MIN_MB..MEMORY_MAX_MB), MEMORY_TOTAL_MB)
}
