// ==========================================
// Excel 数据提取服务 - 网格装载器
// ==========================================
// 职责: 将一个工作表读入矩形网格, 不做任何表头假设
// 输入: calamine 的 Range<Data> (首行即普通数据)
// 输出: 装载后不再变更的 Grid
// ==========================================

use crate::domain::cell::CellValue;
use calamine::{Data, Range};
use chrono::{NaiveDate, NaiveDateTime};

// ==========================================
// Grid - 单工作表的矩形单元格矩阵
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Option<CellValue>>>,
    width: usize,
}

impl Grid {
    /// 从 calamine 的工作表区域装载网格
    ///
    /// 每行宽度固定为区域宽度, 首行不作表头处理。
    pub fn from_range(range: &Range<Data>) -> Self {
        let width = range.width();
        let rows = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        Self { rows, width }
    }

    /// 直接由行数据构建网格 (测试与引擎内部复用)
    ///
    /// 行宽不一致时以最长行为准, 短行补空。
    pub fn from_rows(mut rows: Vec<Vec<Option<CellValue>>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, None);
        }
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> &[Option<CellValue>] {
        &self.rows[index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<CellValue>]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// 单元格值转换
///
/// - 布尔值降级为 "true"/"false" 文本
/// - 错误单元格保留其显示文本 (如 #DIV/0!)
/// - 无法转换为 chrono 时间的序列值视为空
fn convert_cell(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        Data::DateTime(dt) => dt.as_datetime().map(CellValue::DateTime),
        Data::DateTimeIso(s) => Some(parse_iso_datetime(s)),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}

// ISO 格式时间: 解析失败时保留原始文本
fn parse_iso_datetime(s: &str) -> CellValue {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return CellValue::DateTime(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return CellValue::DateTime(dt);
        }
    }
    CellValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = Grid::from_rows(vec![
            vec![Some(CellValue::Text("a".into())), Some(CellValue::Text("b".into()))],
            vec![Some(CellValue::Text("c".into()))],
        ]);

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.row(1), &[Some(CellValue::Text("c".into())), None]);
    }

    #[test]
    fn test_convert_cell_variants() {
        assert_eq!(convert_cell(&Data::Empty), None);
        assert_eq!(
            convert_cell(&Data::String("x".into())),
            Some(CellValue::Text("x".into()))
        );
        assert_eq!(convert_cell(&Data::Int(3)), Some(CellValue::Number(3.0)));
        assert_eq!(
            convert_cell(&Data::Float(2.5)),
            Some(CellValue::Number(2.5))
        );
        assert_eq!(
            convert_cell(&Data::Bool(true)),
            Some(CellValue::Text("true".into()))
        );
    }

    #[test]
    fn test_iso_datetime_parses_date_only() {
        match parse_iso_datetime("2023-05-06") {
            CellValue::DateTime(dt) => {
                assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-05-06 00:00:00")
            }
            other => panic!("expected DateTime, got {:?}", other),
        }
    }

    #[test]
    fn test_iso_datetime_keeps_unparseable_text() {
        assert_eq!(
            parse_iso_datetime("not-a-date"),
            CellValue::Text("not-a-date".into())
        );
    }
}
