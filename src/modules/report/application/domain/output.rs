use rand::Rng;

/// What a finished report reports about itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutput {
    pub pages: u32,
    pub charts: u32,
    /// Human readable, e.g. `"2.4 MB"`
    pub file_size: String,
}

/// 10 to 39 pages, 5 to 19 charts and 1.0 to 4.0 MB.
pub fn generate_output<R: Rng + ?Sized>(rng: &mut R) -> ReportOutput {
    ReportOutput {
        pages: rng.gen_range(10..=39),
        charts: rng.gen_range(5..=19),
        file_size: format!("{:.1} MB", rng.gen_range(1.0..4.0_f64)),
    }
}
