/// ProgressReporter port for run progress output
///
/// Progress goes to a side channel (stderr in the CLI) so it never
/// interferes with document output.
pub trait ProgressReporter {
    /// Reports an intermediate progress message.
    fn report(&self, message: &str);

    /// Reports the final completion message of a run.
    fn report_completion(&self, message: &str);
}
