/// ProgressReporter port for user-facing progress output
///
/// Diagnostic log lines go through `tracing`; this port carries the
/// human-oriented status lines and the progress bar.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Advances the progress indicator to `current` of `total`
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that should stay visible after the progress bar clears
    fn report_error(&self, message: &str);

    /// Reports completion of a phase and clears the progress indicator
    fn report_completion(&self, message: &str);
}
