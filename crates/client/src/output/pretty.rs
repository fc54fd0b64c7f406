//! Pretty output formatting.

use chrono::NaiveDate;
use lanecal_core::layout::{
    classify_bar, continues_from_previous_week, continues_to_next_week, BarEdge, DayCell,
    DayLayout, MonthView,
};

/// Format a laid-out month for display.
///
/// Days with nothing scheduled are skipped; multi-day bars carry a
/// leading or trailing ellipsis where they run over a week-row edge.
pub fn format_month_view(view: &MonthView) -> String {
    let mut output = format!("{}\n", month_title(view));
    output.push_str(&"-".repeat(40));

    let mut any = false;
    for week in &view.weeks {
        let (Some(first), Some(last)) = (week.first(), week.last()) else {
            continue;
        };
        let row_start = first.day.date;
        let row_end = last.day.date;
        for cell in week {
            if cell.visible.is_empty() && cell.remaining == 0 {
                continue;
            }
            any = true;
            output.push_str(&format!("\n{}", format_day_cell(cell, row_start, row_end)));
        }
    }

    if !any {
        output.push_str("\nNo events scheduled.");
    }
    output.push('\n');
    output
}

/// Format one day's layout for display.
pub fn format_day_layout(date: NaiveDate, layout: &DayLayout) -> String {
    if layout.visible.is_empty() && layout.remaining == 0 {
        return format!("No events for {}.\n", date);
    }

    let mut output = format!("{} {}\n", date, date.format("%a"));
    for event in &layout.visible {
        output.push_str(&format!("  [{}] {}\n", event.lane, event.display_text));
    }
    if layout.remaining > 0 {
        output.push_str(&format!("  +{} more\n", layout.remaining));
    }
    output
}

fn format_day_cell(cell: &DayCell, row_start: NaiveDate, row_end: NaiveDate) -> String {
    let marker = if cell.day.is_current_month { "" } else { " *" };
    let mut output = format!("{} {}{}\n", cell.day.date, cell.day.date.format("%a"), marker);

    for event in &cell.visible {
        let edge = classify_bar(
            event.event.kind,
            event.start_date,
            event.end_date,
            row_start,
            row_end,
        );
        let lead = if edge != BarEdge::None
            && continues_from_previous_week(row_start, event.start_date)
        {
            "…"
        } else {
            ""
        };
        let trail = if edge != BarEdge::None && continues_to_next_week(row_end, event.end_date) {
            "…"
        } else {
            ""
        };
        output.push_str(&format!(
            "  [{}] {}{}{}\n",
            event.lane, lead, event.display_text, trail
        ));
    }
    if cell.remaining > 0 {
        output.push_str(&format!("  +{} more\n", cell.remaining));
    }
    output
}

fn month_title(view: &MonthView) -> String {
    match NaiveDate::from_ymd_opt(view.year, view.month, 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => format!("{}-{:02}", view.year, view.month),
    }
}
