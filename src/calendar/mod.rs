//! Business-day accounting and the monthly leave grid.

pub mod business_days;
pub mod grid;
pub mod month;

pub use business_days::count_business_days;
pub use grid::{DayMarker, GridRow, MonthlyGrid, project_month};
pub use month::YearMonth;
