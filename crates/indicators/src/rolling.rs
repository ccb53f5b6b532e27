// In crates/indicators/src/rolling.rs

use crate::{Error, Result};

/// Substituted for a zero average loss so RSI saturates toward 100 instead of
/// dividing by zero.
pub const RSI_LOSS_EPSILON: f64 = 1e-6;

/// Simple moving average aligned with `values`, absent until `period` values
/// have been seen.
///
/// Each mean is taken over its own window rather than a running sum. A window
/// of identical values averages to exactly that value, so equal averages
/// compare equal.
pub fn sma(values: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(Error::InvalidPeriod(period));
    }
    let mut out = vec![None; (period - 1).min(values.len())];
    out.extend(values.windows(period).map(|window| Some(window_mean(window))));
    Ok(out)
}

fn window_mean(window: &[f64]) -> f64 {
    let first = window[0];
    if window.iter().all(|v| *v == first) {
        return first;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

/// Percentage change against the value `lag` rows earlier.
///
/// Absent for the first `lag` rows and wherever the base value is zero.
pub fn pct_change(values: &[f64], lag: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i < lag {
                return None;
            }
            let base = values[i - lag];
            if base == 0.0 {
                None
            } else {
                Some((values[i] / base - 1.0) * 100.0)
            }
        })
        .collect()
}

/// Relative Strength Index using simple (unweighted) rolling means of daily
/// gains and losses.
///
/// The first row has no prior close and contributes neither gain nor loss, so
/// the first value appears at index `period - 1`.
pub fn rsi(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        let delta = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let avg_gains = sma(&gains, period)?;
    let avg_losses = sma(&losses, period)?;

    Ok(avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| Some(rsi_from_averages(gain?, loss?)))
        .collect())
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    // A window without any movement is neutral.
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return 50.0;
    }
    let divisor = if avg_loss == 0.0 { RSI_LOSS_EPSILON } else { avg_loss };
    let rs = avg_gain / divisor;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sma_absent_until_window_full() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let out = sma(&values, 5).unwrap();
        assert_eq!(out.len(), values.len());
        assert!(out[..4].iter().all(Option::is_none));
        assert_close(out[4], 3.0);
        assert_close(out[5], 4.0);
    }

    #[test]
    fn test_sma_rejects_zero_period() {
        assert_eq!(sma(&[1.0], 0), Err(Error::InvalidPeriod(0)));
    }

    #[test]
    fn test_sma_shorter_than_period() {
        let out = sma(&[1.0, 2.0], 5).unwrap();
        assert_eq!(out, vec![None, None]);
        assert!(sma(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn test_sma_of_constant_window_is_exact() {
        let values = vec![0.297; 40];
        let fast = sma(&values, 5).unwrap();
        let slow = sma(&values, 20).unwrap();
        for i in 19..values.len() {
            assert_eq!(fast[i], Some(0.297));
            assert_eq!(slow[i], Some(0.297));
        }
    }

    #[test]
    fn test_pct_change() {
        let out = pct_change(&[100.0, 0.0, 110.0, 50.0], 2);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_close(out[2], 10.0);
        // Base of zero yields no value.
        assert_eq!(out[3], None);
    }

    #[test]
    fn test_rsi_first_value_at_period_minus_one() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let out = rsi(&closes, 14).unwrap();
        assert!(out[..13].iter().all(Option::is_none));
        assert!(out[13].is_some());
    }

    #[test]
    fn test_rsi_no_losses_saturates() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let last = rsi(&closes, 14).unwrap()[29].unwrap();
        assert!(last > 99.99 && last <= 100.0);
    }

    #[test]
    fn test_rsi_no_gains_is_zero() {
        let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
        assert_close(rsi(&closes, 14).unwrap()[29], 0.0);
    }

    #[test]
    fn test_rsi_flat_window_is_neutral() {
        let closes = vec![42.0; 30];
        assert_close(rsi(&closes, 14).unwrap()[29], 50.0);
    }

    #[test]
    fn test_rsi_balanced_moves() {
        // Alternating +1/-1 gives equal average gain and loss.
        let closes: Vec<f64> = (0..31).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        let out = rsi(&closes, 14).unwrap();
        assert_close(out[30], 50.0);
    }
}
