// ==========================================
// Excel 数据提取服务 - 单表抽取流程
// ==========================================
// 职责: 组合各引擎完成一个工作表的完整抽取
// 流程: 合并填充 → 表头探测 → 类型推断 → 行物化
// ==========================================

use crate::domain::record::SheetResult;
use crate::domain::schema::ColumnSchema;
use crate::engine::grid::Grid;
use crate::engine::header_detector::HeaderDetector;
use crate::engine::merge_fill::MergeFiller;
use crate::engine::row_materializer::RowMaterializer;
use crate::engine::type_inferencer::TypeInferencer;
use tracing::debug;

pub struct SheetExtractor;

impl SheetExtractor {
    /// 抽取一个工作表
    ///
    /// # 返回
    /// - Some(SheetResult): 工作表有数据
    /// - None: 没有合格的表头行, 工作表在聚合时被整体跳过
    pub fn extract(sheet_name: &str, grid: &Grid) -> Option<SheetResult> {
        // === 步骤 1: 合并单元格填充 ===
        let filled = MergeFiller::fill(grid);

        // === 步骤 2: 表头探测 ===
        let split = match HeaderDetector::detect(&filled) {
            Some(split) => split,
            None => {
                debug!(sheet = %sheet_name, "工作表无合格表头行, 跳过");
                return None;
            }
        };
        // 表头之后没有任何数据行的工作表同样视为无数据
        if split.data_rows.is_empty() {
            debug!(sheet = %sheet_name, "表头之后无数据行, 跳过");
            return None;
        }
        debug!(
            sheet = %sheet_name,
            header_index = split.header_index,
            data_rows = split.data_rows.len(),
            "表头探测完成"
        );

        // === 步骤 3: 类型推断 ===
        let types = TypeInferencer::infer_all(&split.data_rows, split.columns.len());

        let schema = split
            .columns
            .iter()
            .zip(types.iter())
            .map(|(name, column_type)| ColumnSchema::new(name.clone(), *column_type))
            .collect();

        // === 步骤 4: 行物化 ===
        let rows = RowMaterializer::materialize(&split.columns, &types, &split.data_rows);

        Some(SheetResult::new(sheet_name, schema, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::CellValue;
    use crate::domain::record::FieldValue;
    use crate::domain::schema::ColumnType;

    fn text(s: &str) -> Option<CellValue> {
        Some(CellValue::Text(s.to_string()))
    }

    #[test]
    fn test_extract_full_pipeline() {
        let grid = Grid::from_rows(vec![
            vec![text("季度报表"), None, None],
            vec![text("名称"), text("数量"), text("日期")],
            vec![text("甲"), text("1"), text("2023-01-01")],
            vec![text("乙"), text("2"), text("2023-02-01")],
        ]);

        let result = SheetExtractor::extract("Sheet1", &grid).unwrap();
        assert_eq!(result.sheet_name, "Sheet1");
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.schema[0].column_type, ColumnType::Text);
        assert_eq!(result.schema[1].column_type, ColumnType::Integer);
        assert_eq!(result.schema[2].column_type, ColumnType::DateTime);
        assert_eq!(result.rows[0].get("数量"), Some(&FieldValue::Integer(1)));
        assert_eq!(
            result.rows[1].get("日期"),
            Some(&FieldValue::DateTime("2023-02-01 00:00:00".into()))
        );
    }

    #[test]
    fn test_header_without_data_rows_returns_none() {
        let grid = Grid::from_rows(vec![
            vec![text("标题"), None],
            vec![text("a"), text("b")],
        ]);

        assert!(SheetExtractor::extract("S", &grid).is_none());
    }

    #[test]
    fn test_extract_returns_none_without_header() {
        let grid = Grid::from_rows(vec![
            vec![text("只有标题"), None],
            vec![None, None],
        ]);

        assert!(SheetExtractor::extract("Sheet1", &grid).is_none());
    }

    #[test]
    fn test_merged_title_does_not_become_header() {
        // 填充只沿列向下进行, 横向合并的标题行仍只有 1 个非空格,
        // 不会参与表头竞选
        let grid = Grid::from_rows(vec![
            vec![text("标题"), None, None],
            vec![text("a"), text("b"), text("c")],
            vec![text("1"), text("2"), text("3")],
        ]);

        let result = SheetExtractor::extract("S", &grid).unwrap();
        let keys: Vec<&str> = result.rows[0].keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
