mod continuation;
mod day;
mod heap;
mod lanes;
mod normalize;
mod view;

pub use continuation::{
    classify_bar, continues_from_previous_week, continues_to_next_week, BarEdge,
};
pub use day::{layout_day, DayLayout};
pub use heap::MinHeap;
pub use lanes::assign_lanes;
pub use normalize::{normalize_events, normalize_record};
pub use view::{month_view, DayCell, MonthView};
