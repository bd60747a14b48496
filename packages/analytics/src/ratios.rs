//! Waste processing ratios.

use waste_map_analytics_models::{WasteMetrics, WasteRatios};

/// Upper bound of the processed percentage.
pub const MAX_PERCENT: f64 = 100.0;

/// Derives processing ratios from current waste flows.
///
/// The percentage is `processed / generated * 100`, or `0` when nothing is
/// generated, capped at 100. Source data sometimes reports more processed
/// than generated; the cap hides that, so it is logged and flagged in the
/// result.
///
/// The pie split uses `min(processed, generated)` and the remainder of
/// `generated`, so both parts are non-negative and add up to `generated`.
/// The reported `gap` is not used for the split.
#[must_use]
pub fn ratios(generated: f64, processed: f64, _gap: f64) -> WasteRatios {
    let raw_percent = if generated > 0.0 {
        processed / generated * 100.0
    } else {
        0.0
    };
    let percent_capped = raw_percent > MAX_PERCENT;
    if percent_capped {
        log::warn!(
            "Processed waste ({processed:.2} TPD) exceeds generated ({generated:.2} TPD), capping at 100%"
        );
    }

    let processed_for_pie = processed.min(generated);

    WasteRatios {
        processed_percent: raw_percent.min(MAX_PERCENT),
        processed_for_pie,
        gap_for_pie: generated - processed_for_pie,
        percent_capped,
    }
}

/// Groups the three raw flows for display.
#[must_use]
pub const fn metrics(generated: f64, processed: f64, gap: f64) -> WasteMetrics {
    WasteMetrics {
        generated_tpd: generated,
        processed_tpd: processed,
        gap_tpd: gap,
    }
}
