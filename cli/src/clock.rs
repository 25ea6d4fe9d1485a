use web_time::Instant;

/// Elapsed play time, owned by the session rather than living in global state.
///
/// Seconds from earlier runs (a loaded save) are kept in `carried_secs`; the live part is
/// measured from `running_since`.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    carried_secs: u64,
    running_since: Option<Instant>,
}

impl Stopwatch {
    pub fn started() -> Self {
        Self::resumed_at(0)
    }

    pub fn resumed_at(secs: u64) -> Self {
        Self {
            carried_secs: secs,
            running_since: Some(Instant::now()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.carried_secs += since.elapsed().as_secs();
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.carried_secs
            + self
                .running_since
                .map(|since| since.elapsed().as_secs())
                .unwrap_or(0)
    }
}

/// `3m 7s`, the way the status line shows time.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resumed_watch_keeps_saved_seconds() {
        let watch = Stopwatch::resumed_at(125);
        assert!(watch.elapsed_secs() >= 125);
        assert!(watch.is_running());
    }

    #[test]
    fn stopped_watch_is_frozen() {
        let mut watch = Stopwatch::resumed_at(40);
        watch.stop();
        let frozen = watch.elapsed_secs();

        watch.stop();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_secs(), frozen);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "0m 0s");
        assert_eq!(format_elapsed(187), "3m 7s");
    }
}
