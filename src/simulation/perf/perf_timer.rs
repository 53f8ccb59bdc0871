/// Milliseconds on a monotonic-enough clock: `Date.now()` in the browser,
/// a process-wide `Instant` epoch natively.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Stopwatch for one tick or one tick phase.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started_ms: now_ms() }
    }

    /// Never negative, even if the browser clock steps backwards.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

/// Run `f`, adding its duration to `slot` when timing is on.
#[inline]
pub(crate) fn timed<T>(enabled: bool, slot: &mut f64, f: impl FnOnce() -> T) -> T {
    if !enabled {
        return f();
    }
    let timer = PerfTimer::start();
    let out = f();
    *slot += timer.elapsed_ms();
    out
}
