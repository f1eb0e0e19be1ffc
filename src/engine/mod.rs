// ==========================================
// Excel 数据提取服务 - 引擎层
// ==========================================
// 职责: 实现表格抽取的各级规则引擎
// 流程: 网格装载 → 合并单元格填充 → 表头探测 → 类型推断 → 行物化
// ==========================================

pub mod grid;
pub mod header_detector;
pub mod merge_fill;
pub mod row_materializer;
pub mod sheet_extractor;
pub mod type_inferencer;

// 重导出核心引擎
pub use grid::Grid;
pub use header_detector::{HeaderDetector, HeaderSplit};
pub use merge_fill::MergeFiller;
pub use row_materializer::RowMaterializer;
pub use sheet_extractor::SheetExtractor;
pub use type_inferencer::TypeInferencer;
