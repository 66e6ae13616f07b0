//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file, normalize cells → AdmissionDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ AdmissionDataset  │  Vec<StudentRecord>, distinct values per column
//!   └──────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐      ┌───────────┐
//!   │  filter   │ ───▶ │ aggregate  │  counts, KPIs → DashboardView
//!   └──────────┘      └───────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod options;
pub mod view;

pub use aggregate::{aggregate_by, aggregate_by_pair, percentage, CountTable, CrossTable};
pub use error::DatasetError;
pub use filter::{filter, FilterState, RowSubset};
pub use loader::load_file;
pub use model::{AdmissionDataset, Column, StudentRecord};
pub use options::{resolve_course_options, CourseOptions};
pub use view::{recompute, DashboardView, Kpis};
