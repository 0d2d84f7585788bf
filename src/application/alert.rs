use tracing::error;

/// User-facing alert sink, implemented by the UI layer
pub trait AlertPresenter: Send + Sync {
    /// Shows `message` under `title`
    fn show_alert(&self, title: &str, message: &str);
}

/// Presenter that only writes the alert to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertPresenter;

impl AlertPresenter for LogAlertPresenter {
    fn show_alert(&self, title: &str, message: &str) {
        error!("{}: {}", title, message);
    }
}
