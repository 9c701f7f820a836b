//! Text rendering for scan results.
//!
//! Pure string builders so the output can be unit tested without
//! touching the network or a terminal.

use screener_engine::{ScanEntry, ScanOutcome};

/// Render the ranked table view with a summary header.
pub fn render_ranking(outcome: &ScanOutcome) -> String {
    if outcome.entries.is_empty() {
        return empty_message(outcome);
    }

    let mut out = String::new();
    out.push_str(&summary_header(outcome));
    out.push('\n');

    out.push_str(&format!(
        "{:<5} {:<8} {:>10} {:>7} {:>7} {:>7} {:>7}  {}\n",
        "Rank", "Ticker", "Price", "QVM", "Qual", "Value", "Mom", "Screens"
    ));

    for (i, entry) in outcome.entries.iter().enumerate() {
        let s = &entry.snapshot;
        out.push_str(&format!(
            "{:<5} {:<8} {:>10.2} {:>7.1} {:>7.1} {:>7.1} {:>7.1}  {}/4\n",
            i + 1,
            s.ticker,
            s.price,
            entry.score.qvm,
            entry.score.quality,
            entry.score.value,
            entry.score.momentum,
            screens_passed(entry),
        ));
    }

    out
}

/// Render the per-ticker card view.
pub fn render_cards(outcome: &ScanOutcome) -> String {
    if outcome.entries.is_empty() {
        return empty_message(outcome);
    }

    let mut out = String::new();
    out.push_str(&summary_header(outcome));

    for entry in &outcome.entries {
        let s = &entry.snapshot;
        let c = &entry.criteria;

        out.push('\n');
        out.push_str(&format!("{}\n", s.ticker));
        out.push_str(&format!(
            "  Price {:.2}  QVM {:.1}  (quality {:.1} / value {:.1} / momentum {:.1})\n",
            s.price, entry.score.qvm, entry.score.quality, entry.score.value, entry.score.momentum
        ));
        out.push_str(&format!(
            "  SMA50 {:.2}  SMA100 {:.2}  SMA200 {:.2}  RSI14 {:.1}  ATR14 {:.2}\n",
            s.sma50, s.sma100, s.sma200, s.rsi, s.atr
        ));
        out.push_str(&format!(
            "  Volume {}  (20d avg {})\n",
            fmt_volume(s.volume),
            fmt_volume(s.avg_volume20)
        ));
        out.push_str(&format!(
            "  Perf 1M {}  3M {}  6M {}\n",
            fmt_pct(s.perf_1m),
            fmt_pct(s.perf_3m),
            fmt_pct(s.perf_6m)
        ));
        out.push_str(&format!(
            "  P/E {}  P/B {}  P/S {}  Yield {}  Mkt cap {}\n",
            fmt_opt(s.pe),
            fmt_opt(s.pb),
            fmt_opt(s.ps),
            fmt_yield(s.dividend_yield),
            fmt_market_cap(s.market_cap)
        ));
        out.push_str(&format!(
            "  ROE {}  Margin {}  Growth {}\n",
            fmt_pct(s.roe),
            fmt_pct(s.operating_margin),
            fmt_pct(s.revenue_growth)
        ));
        out.push_str(&format!(
            "  Screens: trend {}  volume {}  volatility {}  momentum {}\n",
            pass_mark(c.trend),
            pass_mark(c.volume),
            pass_mark(c.volatility),
            pass_mark(c.momentum)
        ));
    }

    out
}

fn summary_header(outcome: &ScanOutcome) -> String {
    let entries = &outcome.entries;
    let n = entries.len();

    let avg_qvm = entries.iter().map(|e| e.score.qvm).sum::<f64>() / n as f64;
    let best_quality = best_by(entries, |e| e.score.quality);
    let best_value = best_by(entries, |e| e.score.value);
    let best_momentum = best_by(entries, |e| e.score.momentum);

    let mut out = String::new();
    out.push_str(&format!(
        "Scanned {} tickers ({} dropped)\n",
        n + outcome.dropped,
        outcome.dropped
    ));
    out.push_str(&format!("Average QVM: {:.1}\n", avg_qvm));
    out.push_str(&format!(
        "Best quality: {}  Best value: {}  Best momentum: {}\n",
        best_quality, best_value, best_momentum
    ));
    out
}

fn best_by(entries: &[ScanEntry], key: impl Fn(&ScanEntry) -> f64) -> String {
    entries
        .iter()
        .max_by(|a, b| {
            key(a)
                .partial_cmp(&key(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| format!("{} ({:.1})", e.snapshot.ticker, key(e)))
        .unwrap_or_else(|| "N/A".to_string())
}

fn empty_message(outcome: &ScanOutcome) -> String {
    if outcome.dropped > 0 {
        format!(
            "No data available ({} tickers dropped; see logs)\n",
            outcome.dropped
        )
    } else {
        "No data available\n".to_string()
    }
}

fn screens_passed(entry: &ScanEntry) -> usize {
    let c = &entry.criteria;
    [c.trend, c.volume, c.volatility, c.momentum]
        .iter()
        .filter(|&&b| b)
        .count()
}

fn pass_mark(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.1}%", v),
        None => "N/A".to_string(),
    }
}

fn fmt_yield(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "N/A".to_string(),
    }
}

fn fmt_volume(volume: f64) -> String {
    if volume >= 1e9 {
        format!("{:.1}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("{:.1}M", volume / 1e6)
    } else if volume >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{:.0}", volume)
    }
}

fn fmt_market_cap(cap: Option<f64>) -> String {
    match cap {
        Some(c) if c >= 1e12 => format!("{:.2}T", c / 1e12),
        Some(c) if c >= 1e9 => format!("{:.1}B", c / 1e9),
        Some(c) if c >= 1e6 => format!("{:.1}M", c / 1e6),
        Some(c) => format!("{:.0}", c),
        None => "N/A".to_string(),
    }
}
