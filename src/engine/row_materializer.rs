// ==========================================
// Excel 数据提取服务 - 行物化器
// ==========================================
// 职责: 将数据行转换为列名→取值的有序映射
// 规则: 空值与不可表示的时间哨兵归一为 Null;
//       日期时间列统一输出 YYYY-MM-DD HH:MM:SS
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::record::{FieldValue, RowRecord};
use crate::domain::schema::ColumnType;
use crate::engine::type_inferencer::{as_datetime, as_decimal, as_integer};

pub struct RowMaterializer;

impl RowMaterializer {
    /// 物化全部数据行
    ///
    /// # 参数
    /// - columns: 表头列名, 从左到右
    /// - types: 每列的语义类型 (与 columns 等长)
    /// - data_rows: 表头之后的数据行
    pub fn materialize(
        columns: &[String],
        types: &[ColumnType],
        data_rows: &[Vec<Option<CellValue>>],
    ) -> Vec<RowRecord> {
        data_rows
            .iter()
            .map(|row| Self::materialize_row(columns, types, row))
            .collect()
    }

    fn materialize_row(
        columns: &[String],
        types: &[ColumnType],
        row: &[Option<CellValue>],
    ) -> RowRecord {
        let mut record = RowRecord::with_capacity(columns.len());
        for (col, (name, column_type)) in columns.iter().zip(types.iter()).enumerate() {
            let cell = row.get(col).and_then(|c| c.as_ref());
            record.insert(name.clone(), Self::convert(cell, *column_type));
        }
        record
    }

    /// 单元格取值按列类型归一
    fn convert(cell: Option<&CellValue>, column_type: ColumnType) -> FieldValue {
        let value = match cell {
            Some(v) => v,
            None => return FieldValue::Null,
        };

        match column_type {
            ColumnType::Integer => match as_integer(value) {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Text(value.to_display_string()),
            },
            ColumnType::Decimal => match as_decimal(value) {
                Some(d) => FieldValue::Decimal(d),
                None => FieldValue::Text(value.to_display_string()),
            },
            ColumnType::DateTime => match as_datetime(value) {
                Some(dt) => FieldValue::DateTime(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
                // 不可表示的时间哨兵归一为 Null
                None => FieldValue::Null,
            },
            ColumnType::Text => FieldValue::Text(value.to_display_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_key_order_matches_header_order() {
        let columns = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        let types = vec![ColumnType::Text; 3];
        let rows = vec![vec![
            Some(CellValue::Text("1".into())),
            Some(CellValue::Text("2".into())),
            Some(CellValue::Text("3".into())),
        ]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_cell_becomes_null() {
        let columns = vec!["a".to_string()];
        let types = vec![ColumnType::Integer];
        let rows = vec![vec![None]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        assert_eq!(records[0].get("a"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_datetime_column_formats_values() {
        let dt = NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(10, 20, 30)
            .unwrap();
        let columns = vec!["t".to_string()];
        let types = vec![ColumnType::DateTime];
        let rows = vec![vec![Some(CellValue::DateTime(dt))]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        assert_eq!(
            records[0].get("t"),
            Some(&FieldValue::DateTime("2023-01-02 10:20:30".into()))
        );
    }

    #[test]
    fn test_numeric_columns_keep_numeric_form() {
        let columns = vec!["i".to_string(), "d".to_string()];
        let types = vec![ColumnType::Integer, ColumnType::Decimal];
        let rows = vec![vec![
            Some(CellValue::Number(7.0)),
            Some(CellValue::Text("1.5".into())),
        ]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        assert_eq!(records[0].get("i"), Some(&FieldValue::Integer(7)));
        assert_eq!(records[0].get("d"), Some(&FieldValue::Decimal(1.5)));
    }

    #[test]
    fn test_text_column_keeps_raw_text() {
        let columns = vec!["a".to_string()];
        let types = vec![ColumnType::Text];
        let rows = vec![vec![Some(CellValue::Text("  原样 ".into()))]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        assert_eq!(records[0].get("a"), Some(&FieldValue::Text("  原样 ".into())));
    }

    #[test]
    fn test_duplicate_header_names_overwrite_earlier_value() {
        // 沿用观测行为: 重名列保留首个位置, 取值被后列覆盖
        let columns = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let types = vec![ColumnType::Text; 3];
        let rows = vec![vec![
            Some(CellValue::Text("前值".into())),
            Some(CellValue::Text("中".into())),
            Some(CellValue::Text("后值".into())),
        ]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(records[0].get("a"), Some(&FieldValue::Text("后值".into())));
    }

    #[test]
    fn test_short_row_missing_cells_are_null() {
        let columns = vec!["a".to_string(), "b".to_string()];
        let types = vec![ColumnType::Text, ColumnType::Text];
        let rows = vec![vec![Some(CellValue::Text("x".into()))]];

        let records = RowMaterializer::materialize(&columns, &types, &rows);
        assert_eq!(records[0].get("b"), Some(&FieldValue::Null));
    }
}
