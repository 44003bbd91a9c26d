/// Data layer: the model, CSV loading, and the parsed table type.
///
/// Architecture:
/// ```text
///   directory / *.csv selection
///        │
///        ▼
///   ┌───────────┐
///   │ DataModel │  path set, prefix filter, emits PathsChanged
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  loader   │  scan directories, parse each CSV → Table
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │   Table   │  header names + numeric columns, keyed by file stem
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod table;
