pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, legend, section, source_marker, success, summary_row};
pub use progress::ArtifactProgress;
pub use table::{coverage_table, resolution_table, TableBuilder};
pub use theme::{theme, Theme};
