// ==========================================
// Excel 数据提取服务 - 单元格值
// ==========================================
// 职责: 表示一个单元格的标量值
// 约定: 空单元格以 Option::None 表示,不引入 Empty 变体
// ==========================================

use chrono::NaiveDateTime;

/// 单元格标量值
///
/// 布尔值与错误单元格在网格装载时统一降级为文本,
/// 因此引擎内部只需处理文本/数值/时间三类。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 文本
    Text(String),

    /// 数值 (整数与小数统一为 f64)
    Number(f64),

    /// 日期时间
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// 将值强制转换为显示文本
    ///
    /// 用于表头列名生成与 Text 列的取值。
    /// 整数值的数值不输出小数点 (1.0 -> "1")。
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
