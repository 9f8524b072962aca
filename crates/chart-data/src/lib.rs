// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports record transforms, scales, and palettes.

pub mod record;
pub mod aggregate;
pub mod pivot;
pub mod timeseries;
pub mod hierarchy;
pub mod color;
pub mod palette;
pub mod percent;

pub use record::{CategoryPoint, Field, Record};
pub use aggregate::{average_by, count_by, filter_by, group_by, sort_by, sum_by, Group, SortOrder};
pub use pivot::{pie_slices, pivot, split_points, PieSlice, SeriesBundle, SeriesColumn};
pub use timeseries::{fill_gaps, moving_average, normalize, TimePoint, TimeValue};
pub use hierarchy::{color_by_value, flatten, FlatNode, HierarchyNode, ROOT_PARENT};
pub use color::{color_for_value, interpolate, value_range, ColorParseError, ColorStop, Gradient, Rgb};
pub use palette::Palette;
pub use percent::{percentages, with_percentage, Weighted};
