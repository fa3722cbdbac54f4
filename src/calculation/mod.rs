//! Pure computations behind the console screens.
//!
//! This module contains the category weight normalizer, the period status
//! resolver, and the shared numeric and date formatting every screen routes
//! through. None of it performs I/O.

mod formatting;
mod period_status;
mod weight_normalizer;

pub use formatting::{
    DATE_PLACEHOLDER, format_date, format_date_time, format_percentage, format_score,
    format_weight, fraction_to_percent, parse_timestamp, percent_to_fraction, round2,
};
pub use period_status::{
    GapPolicy, PeriodStatus, period_status_label, resolve_period_status,
    resolve_period_status_str,
};
pub use weight_normalizer::{
    CATEGORY_TOTAL, WEIGHT_TOLERANCE, category_totals, normalize_all, normalize_category,
    normalize_category_in, unbalanced_categories,
};
