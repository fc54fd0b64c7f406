//! Mock data generation for testing and seeding.
//!
//! These functions are deterministic and have no side effects, so they can
//! be used in unit tests, CLI demos, and fixture files alike.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::types::EventRecord;

/// Generate mock event records spread around a center date.
///
/// Creates a realistic distribution of events:
/// - ~15% multi-day events (conferences, vacations)
/// - ~25% all-day events (birthdays, holidays)
/// - ~60% timed events (meetings, appointments)
///
/// # Example
///
/// ```
/// use lanecal_core::calendar::generate_seed_events;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let calendar_id = Uuid::new_v4();
/// let center = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let events = generate_seed_events(calendar_id, center, 20);
///
/// assert_eq!(events.len(), 20);
/// ```
pub fn generate_seed_events(
    calendar_id: Uuid,
    center_date: NaiveDate,
    count: u32,
) -> Vec<EventRecord> {
    let multi_day_count = (count as f32 * 0.15).ceil() as u32;
    let all_day_count = (count as f32 * 0.25).ceil() as u32;
    let timed_count = count.saturating_sub(multi_day_count + all_day_count);

    let mut events = Vec::with_capacity(count as usize);

    let multi_day_titles = [
        "Team Retreat",
        "Conference",
        "Vacation",
        "Training Workshop",
        "Hackathon",
    ];
    let multi_day_colors = ["#8B5CF6", "#EC4899", "#10B981", "#F59E0B", "#3B82F6"];
    for i in 0..multi_day_count {
        let start = center_date + Duration::days(i as i64 * 2 - 2);
        let end = start + Duration::days(2);
        let title = multi_day_titles[i as usize % multi_day_titles.len()];
        let color = multi_day_colors[i as usize % multi_day_colors.len()];
        events.push(EventRecord::multi_day(calendar_id, title, start, end).with_color(color));
    }

    let all_day_titles = [
        "Birthday Party",
        "Public Holiday",
        "Company Anniversary",
        "Release Day",
        "Moving Day",
    ];
    let all_day_colors = ["#EC4899", "#10B981", "#F59E0B", "#3B82F6", "#8B5CF6"];
    for i in 0..all_day_count {
        let date = center_date + Duration::days(i as i64 - 1);
        let title = all_day_titles[i as usize % all_day_titles.len()];
        let color = all_day_colors[i as usize % all_day_colors.len()];
        events.push(EventRecord::all_day(calendar_id, title, date).with_color(color));
    }

    let timed_titles = [
        "Standup Meeting",
        "Lunch with Team",
        "Product Review",
        "Gym Session",
        "Team Sync",
        "Coffee with Mentor",
        "Doctor Appointment",
        "Code Review",
        "Sprint Planning",
        "1:1 Meeting",
    ];
    let timed_colors = [
        "#3B82F6", "#F97316", "#3B82F6", "#10B981", "#3B82F6", "#F97316", "#EF4444", "#8B5CF6",
        "#3B82F6", "#F59E0B",
    ];
    for i in 0..timed_count {
        let date = center_date + Duration::days((i % 7) as i64 - 3);
        let start_hour = 8 + (i % 10);
        let title = timed_titles[i as usize % timed_titles.len()];
        let color = timed_colors[i as usize % timed_colors.len()];
        let start = Utc.from_utc_datetime(
            &date
                .and_hms_opt(start_hour, 0, 0)
                .unwrap_or_default(),
        );
        let end = start + Duration::hours(1);
        events.push(EventRecord::timed(calendar_id, title, start, end).with_color(color));
    }

    events
}
