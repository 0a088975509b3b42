pub mod primitives;
pub mod types;
pub mod view_kind;

pub use primitives::{
    DEFAULT_ROUND_DIGITS, format_date_label, parse_date_key, per_capita, round_default,
    round_to_digits,
};
pub use types::{DatedCounts, GLOBAL_SELECTOR, Metric, Population, RawSeries, Scope};
pub use view_kind::ViewKind;
