use tracing::info;

/// Trait for types that keep a record of what the player typed.
#[cfg_attr(test, mockall::automock)]
pub trait Journal {
    /// Records a `payload` under a short `label` on the given `channel`.
    fn record(&mut self, payload: &str, label: &str, channel: &str);
}

/// A [`Journal`] that emits [`tracing`] events on the `journal` target.
#[derive(Debug, Default, Copy, Clone)]
pub struct Logger;

impl Journal for Logger {
    fn record(&mut self, payload: &str, label: &str, channel: &str) {
        info!(target: "journal", %channel, %label, "{}", payload);
    }
}
