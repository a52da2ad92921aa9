//! Short weekday labels for forecast cards.

use chrono::{Datelike, Local, Weekday};

pub const DAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Label of the day `offset` days away from `today`. Offsets may be negative or larger than a week.
pub fn day_label(today: Weekday, offset: i64) -> &'static str {
    let start = i64::from(today.num_days_from_sunday());
    let mut index = (start + offset % 7) % 7;
    if index < 0 {
        index += 7;
    }
    DAY_LABELS[index as usize]
}

/// Same as [`day_label`], with today taken from the local clock.
pub fn day_label_from_now(offset: i64) -> &'static str {
    day_label(Local::now().weekday(), offset)
}
