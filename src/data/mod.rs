/// Data layer: point types and file loading.
///
/// Architecture:
/// ```text
///  input/2025/day8.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse x,y,z rows → PointTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PointTable │  Vec<Point3>, bounds
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
