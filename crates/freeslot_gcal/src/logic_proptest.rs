#[cfg(test)]
mod tests {
    use crate::logic::calculate_free_slots;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use freeslot_common::TimeWindow;
    use proptest::prelude::*;

    fn day_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap()
    }

    fn day_end() -> DateTime<Utc> {
        day_start() + Duration::seconds(86_399)
    }

    // Busy intervals as (offset, length) in minutes relative to midnight, sorted
    // by start the way the gateway hands them over. Every interval starts before
    // the end of the day; it may start the evening before or run past midnight.
    fn busy_strategy() -> impl Strategy<Value = Vec<TimeWindow>> {
        prop::collection::vec((-180i64..1_440, 0i64..240), 0..12).prop_map(|raw| {
            let mut busy: Vec<TimeWindow> = raw
                .into_iter()
                .map(|(offset, length)| {
                    let start = day_start() + Duration::minutes(offset);
                    TimeWindow::new(start, start + Duration::minutes(length))
                })
                .collect();
            busy.sort_by_key(|w| w.start);
            busy
        })
    }

    // Seconds of the day covered by the union of `busy`.
    fn busy_seconds_within_day(busy: &[TimeWindow]) -> i64 {
        let mut covered = 0;
        let mut cursor = day_start();
        for w in busy {
            let start = w.start.max(cursor).min(day_end());
            let end = w.end.min(day_end());
            if end > start {
                covered += (end - start).num_seconds();
            }
            cursor = cursor.max(end);
        }
        covered
    }

    proptest! {
        // Free slots are non-empty, ordered and inside the day
        #[test]
        fn test_free_slots_are_ordered_and_inside_the_day(busy in busy_strategy()) {
            let free = calculate_free_slots(day_start(), day_end(), &busy);

            for slot in &free {
                prop_assert!(slot.start < slot.end, "empty slot: {:?}", slot);
                prop_assert!(slot.start >= day_start() && slot.end <= day_end());
            }
            for pair in free.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start, "slots overlap: {:?}", pair);
            }
        }

        // No free slot intersects a busy interval
        #[test]
        fn test_free_slots_never_overlap_busy(busy in busy_strategy()) {
            let free = calculate_free_slots(day_start(), day_end(), &busy);

            for slot in &free {
                for b in &busy {
                    prop_assert!(
                        slot.end <= b.start || slot.start >= b.end,
                        "free {:?} overlaps busy {:?}", slot, b
                    );
                }
            }
        }

        // Free and busy time together tile the whole day
        #[test]
        fn test_free_and_busy_cover_the_day(busy in busy_strategy()) {
            let free = calculate_free_slots(day_start(), day_end(), &busy);
            let free_seconds: i64 = free.iter().map(|w| (w.end - w.start).num_seconds()).sum();

            prop_assert_eq!(
                free_seconds + busy_seconds_within_day(&busy),
                (day_end() - day_start()).num_seconds()
            );
        }
    }
}
