use log::debug;
use std::time::Instant;

pub struct Logging;

impl Logging {
    /// Runs `action` and logs how long it took at debug level.
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let now = Instant::now();

        let result = action();

        let elapsed = now.elapsed().as_millis();
        if elapsed > 0 {
            debug!("{}, {} ms", message, elapsed);
        }

        result
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}
