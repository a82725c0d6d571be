/// Immutable per-run configuration, resolved once at startup.
pub struct Config {
    /// Aborts the whole run on the first bad batch line.
    ///
    /// When unset, bad lines are reported and the remaining lines are still
    /// processed; the process exits non-zero at the end.
    pub strict: bool,
}
