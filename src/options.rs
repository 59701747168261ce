// src/options.rs

/// Intensity widths a scan header may legitimately turn out to use
pub const DEFAULT_CANDIDATE_WIDTHS: [u16; 4] = [1, 2, 3, 4];

/// Storage holding the four raw data streams
pub const DEFAULT_STORAGE: &str = "GCMS Raw Data";

/// Settings for a decode run
///
/// ```
/// use qgd_rs::DecodeOptions;
///
/// let options = DecodeOptions::default()
///     .retention_time_tolerance_ms(5)
///     .parallel(false);
/// assert_eq!(options.storage, "GCMS Raw Data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub storage: String,
    pub candidate_widths: Vec<u16>,
    /// Header/stream retention time differences up to this are not reported
    pub retention_time_tolerance_ms: u32,
    /// Decode scans on the rayon pool. No effect without the `parallel` feature.
    pub parallel: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            storage: DEFAULT_STORAGE.to_string(),
            candidate_widths: DEFAULT_CANDIDATE_WIDTHS.to_vec(),
            retention_time_tolerance_ms: 0,
            parallel: true,
        }
    }
}

impl DecodeOptions {
    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    /// Replace the candidate widths. Order is irrelevant; duplicates and widths outside 1..=4 are dropped.
    pub fn candidate_widths(mut self, widths: &[u16]) -> Self {
        let mut widths: Vec<u16> = widths.iter().copied().filter(|w| (1..=4).contains(w)).collect();
        widths.sort_unstable();
        widths.dedup();
        self.candidate_widths = widths;
        self
    }

    pub fn retention_time_tolerance_ms(mut self, tolerance: u32) -> Self {
        self.retention_time_tolerance_ms = tolerance;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub(crate) fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}
