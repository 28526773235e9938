/// Weight given to WER when the caller does not pick one.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// TEME-Error: `alpha * wer + (1 - alpha) * tmr`. Lower is better.
///
/// `alpha` is not range-checked. Values outside `[0, 1]` extrapolate
/// linearly instead of being rejected.
pub fn teme_error(wer: f64, tmr: f64, alpha: f64) -> f64 {
    alpha * wer + (1.0 - alpha) * tmr
}
