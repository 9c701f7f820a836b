//! Metrics assembler.
//!
//! Combines indicator outputs with fundamentals and trailing
//! performance into one per-ticker snapshot, evaluated at the latest
//! bar. A snapshot exists only when every technical field is defined;
//! partial fundamentals are tolerated.

use screener_core::traits::Indicator;
use screener_core::types::{BarSliceExt, Fundamentals, PriceBar, TickerSnapshot};
use screener_indicators::{Atr, Rsi, Sma};

/// Minimum bars required for a snapshot (the SMA200 window).
pub const MIN_BARS: usize = 200;

const RSI_PERIOD: usize = 14;
const ATR_PERIOD: usize = 14;
const VOLUME_PERIOD: usize = 20;

/// Approximate trading-day offsets for trailing performance.
const PERF_1M_BARS: usize = 22;
const PERF_3M_BARS: usize = 66;
const PERF_6M_BARS: usize = 132;

/// Build a snapshot from a price series and provider fundamentals.
///
/// Returns `None` when the series is shorter than [`MIN_BARS`] or any
/// required indicator is undefined at the latest bar; the caller
/// treats that the same as a failed fetch. Fundamental ratio fields
/// come in as provider fractions and leave as percentages.
pub fn assemble(
    ticker: &str,
    bars: &[PriceBar],
    fundamentals: &Fundamentals,
) -> Option<TickerSnapshot> {
    if bars.len() < MIN_BARS {
        return None;
    }

    let closes = bars.closes();
    let highs = bars.highs();
    let lows = bars.lows();
    let volumes = bars.volumes();

    let sma50 = latest_value(&Sma::new(50).calculate(&closes))?;
    let sma100 = latest_value(&Sma::new(100).calculate(&closes))?;
    let sma200 = latest_value(&Sma::new(200).calculate(&closes))?;
    let rsi = latest_value(&Rsi::new(RSI_PERIOD).calculate(&closes))?;
    let atr = latest_value(&Atr::new(ATR_PERIOD).calculate_ohlc(&highs, &lows, &closes))?;
    let avg_volume20 = latest_value(&Sma::new(VOLUME_PERIOD).calculate(&volumes))?;

    let latest = bars.latest()?;

    // Trailing performance counts bars within the qualified region,
    // the suffix where every indicator above is defined. SMA200 has
    // the widest window so it sets the boundary.
    let qualified = &closes[MIN_BARS - 1..];

    Some(TickerSnapshot {
        ticker: ticker.to_string(),
        price: latest.close,
        sma50,
        sma100,
        sma200,
        rsi,
        atr,
        volume: latest.volume,
        avg_volume20,
        perf_1m: trailing_perf(qualified, PERF_1M_BARS),
        perf_3m: trailing_perf(qualified, PERF_3M_BARS),
        perf_6m: trailing_perf(qualified, PERF_6M_BARS),
        pe: fundamentals.trailing_pe,
        pb: fundamentals.price_to_book,
        ps: fundamentals.price_to_sales,
        dividend_yield: to_percent(fundamentals.dividend_yield),
        roe: to_percent(fundamentals.return_on_equity),
        operating_margin: to_percent(fundamentals.operating_margin),
        revenue_growth: to_percent(fundamentals.revenue_growth),
        market_cap: fundamentals.market_cap,
    })
}

/// The indicator value at the latest bar, if defined and finite.
fn latest_value(values: &[f64]) -> Option<f64> {
    values.last().copied().filter(|v| v.is_finite())
}

/// Percent change from the close `offset` bars back to the latest one.
fn trailing_perf(closes: &[f64], offset: usize) -> Option<f64> {
    if offset == 0 || closes.len() < offset {
        return None;
    }
    let latest = closes[closes.len() - 1];
    let past = closes[closes.len() - offset];
    if past == 0.0 {
        return None;
    }
    Some((latest / past - 1.0) * 100.0)
}

fn to_percent(fraction: Option<f64>) -> Option<f64> {
    fraction.map(|v| v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn make_bars(n: usize) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        (0..n)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.1).sin() * 5.0;
                PriceBar::new(
                    start.checked_add_days(Days::new(i as u64)).unwrap(),
                    close - 0.5,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1_000_000.0 + (i as f64) * 100.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_short_series_yields_no_snapshot() {
        let fundamentals = Fundamentals::default();
        for n in [0, 1, 50, 199] {
            assert!(assemble("AAPL", &make_bars(n), &fundamentals).is_none());
        }
    }

    #[test]
    fn test_minimum_series_yields_snapshot() {
        let bars = make_bars(MIN_BARS);
        let snapshot = assemble("AAPL", &bars, &Fundamentals::default()).unwrap();

        assert_eq!(snapshot.ticker, "AAPL");
        assert!((snapshot.price - bars.last().unwrap().close).abs() < 1e-10);
        assert!(snapshot.sma50.is_finite());
        assert!(snapshot.sma200.is_finite());
        assert!(snapshot.rsi >= 0.0 && snapshot.rsi <= 100.0);
        assert!(snapshot.atr > 0.0);

        // Qualified region has exactly one bar: no perf figures yet
        assert!(snapshot.perf_1m.is_none());
        assert!(snapshot.perf_3m.is_none());
        assert!(snapshot.perf_6m.is_none());
    }

    #[test]
    fn test_flat_series_has_undefined_rsi() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let bars: Vec<PriceBar> = (0..MIN_BARS)
            .map(|i| {
                PriceBar::new(
                    start.checked_add_days(Days::new(i as u64)).unwrap(),
                    100.0,
                    100.0,
                    100.0,
                    100.0,
                    1_000_000.0,
                )
            })
            .collect();

        // RSI has no defined value on a series with no movement
        assert!(assemble("FLAT", &bars, &Fundamentals::default()).is_none());
    }

    #[test]
    fn test_trailing_performance_offsets() {
        let bars = make_bars(MIN_BARS + 199); // qualified region of 200 bars
        let snapshot = assemble("AAPL", &bars, &Fundamentals::default()).unwrap();

        let qualified: Vec<f64> = bars[MIN_BARS - 1..].iter().map(|b| b.close).collect();
        let latest = qualified[qualified.len() - 1];

        let expect = |offset: usize| (latest / qualified[qualified.len() - offset] - 1.0) * 100.0;
        assert!((snapshot.perf_1m.unwrap() - expect(22)).abs() < 1e-9);
        assert!((snapshot.perf_3m.unwrap() - expect(66)).abs() < 1e-9);
        assert!((snapshot.perf_6m.unwrap() - expect(132)).abs() < 1e-9);
    }

    #[test]
    fn test_perf_absent_until_enough_qualified_bars() {
        // 220 bars -> 21-bar qualified region, one short of the 1m offset
        let snapshot = assemble("AAPL", &make_bars(MIN_BARS + 20), &Fundamentals::default()).unwrap();
        assert!(snapshot.perf_1m.is_none());

        // One more bar and the 1m figure appears
        let snapshot = assemble("AAPL", &make_bars(MIN_BARS + 21), &Fundamentals::default()).unwrap();
        assert!(snapshot.perf_1m.is_some());
        assert!(snapshot.perf_3m.is_none());
    }

    #[test]
    fn test_fundamentals_converted_to_percent() {
        let fundamentals = Fundamentals {
            trailing_pe: Some(18.5),
            price_to_book: Some(2.4),
            price_to_sales: None,
            dividend_yield: Some(0.021),
            return_on_equity: Some(0.32),
            operating_margin: Some(0.25),
            revenue_growth: None,
            market_cap: Some(2.0e12),
        };
        let snapshot = assemble("AAPL", &make_bars(250), &fundamentals).unwrap();

        // Ratios pass through; fractions become percent
        assert_eq!(snapshot.pe, Some(18.5));
        assert_eq!(snapshot.pb, Some(2.4));
        assert!(snapshot.ps.is_none());
        assert!((snapshot.dividend_yield.unwrap() - 2.1).abs() < 1e-10);
        assert!((snapshot.roe.unwrap() - 32.0).abs() < 1e-10);
        assert!((snapshot.operating_margin.unwrap() - 25.0).abs() < 1e-10);
        assert!(snapshot.revenue_growth.is_none());
    }
}
