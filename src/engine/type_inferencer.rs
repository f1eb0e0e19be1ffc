// ==========================================
// Excel 数据提取服务 - 列类型推断引擎
// ==========================================
// 职责: 对每个数据列做一次性的语义类型判定
// 规则: 固定优先级链 整数 → 小数 → 日期时间 → 文本;
//       单个不合格值即否决该类型, 不产生逐格类型
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::schema::ColumnType;
use chrono::{NaiveDate, NaiveDateTime};

// 文本日期的尝试格式, 按常见程度排列
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub struct TypeInferencer;

impl TypeInferencer {
    /// 推断全部列的类型
    ///
    /// # 参数
    /// - data_rows: 表头之后的数据行
    /// - width: 列数 (等于表头宽度)
    pub fn infer_all(data_rows: &[Vec<Option<CellValue>>], width: usize) -> Vec<ColumnType> {
        (0..width)
            .map(|col| Self::infer_column(data_rows, col))
            .collect()
    }

    /// 推断单列类型
    ///
    /// 空值不参与判定; 全空列默认为文本。
    pub fn infer_column(data_rows: &[Vec<Option<CellValue>>], col: usize) -> ColumnType {
        let values: Vec<&CellValue> = data_rows
            .iter()
            .filter_map(|row| row.get(col).and_then(|cell| cell.as_ref()))
            .collect();

        if values.is_empty() {
            return ColumnType::Text;
        }

        if values.iter().all(|v| as_integer(v).is_some()) {
            return ColumnType::Integer;
        }
        if values.iter().all(|v| as_decimal(v).is_some()) {
            return ColumnType::Decimal;
        }
        if values.iter().all(|v| as_datetime(v).is_some()) {
            return ColumnType::DateTime;
        }

        ColumnType::Text
    }
}

/// 整数解析: 数值无小数部分, 或文本可解析为 i64
pub(crate) fn as_integer(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.2e18 => Some(*n as i64),
        CellValue::Text(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// 小数解析: 任意数值, 或文本可解析为 f64
pub(crate) fn as_decimal(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// 日期时间解析: 原生时间值, 或文本匹配任一已知格式
///
/// 数值不参与日期判定 (数值列在更高优先级已被分类)。
pub(crate) fn as_datetime(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(s) => parse_datetime_text(s),
        CellValue::Number(_) => None,
    }
}

pub(crate) fn parse_datetime_text(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}
