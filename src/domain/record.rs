// ==========================================
// Excel 数据提取服务 - 提取结果模型
// ==========================================
// 职责: 行记录、单表结果与整个文件的处理结果
// 约定: 线上字段名与下游反序列化注解一致 (file_name / sheet_name / data / total_rows)
// ==========================================

use crate::domain::schema::ColumnSchema;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ==========================================
// FieldValue - 标注值类型
// ==========================================
// 行记录中的取值, 序列化为自然的 JSON 标量
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 空值标记 (空单元格、不可表示的时间哨兵)
    Null,
    /// 整数列取值
    Integer(i64),
    /// 小数列取值
    Decimal(f64),
    /// 文本列取值
    Text(String),
    /// 日期时间列取值 (已规范化为 YYYY-MM-DD HH:MM:SS)
    DateTime(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// ==========================================
// RowRecord - 有序行记录
// ==========================================
// 列名到取值的有序映射, 键顺序始终等于表头从左到右的顺序。
// 重复列名: 保留首次出现的位置, 取值被后出现的列覆盖
// (沿用观测到的历史行为, 见 DESIGN.md)。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    entries: Vec<(String, FieldValue)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// 插入一个取值
    ///
    /// 列名已存在时就地覆盖取值, 位置不变。
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// 键的有序视图
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// 序列化为 JSON 对象, 保持插入顺序
impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ==========================================
// SheetResult - 单工作表结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SheetResult {
    /// 工作表名
    pub sheet_name: String,

    /// 列模式 (顺序等于表头从左到右)
    pub schema: Vec<ColumnSchema>,

    /// 数据行 (线上字段名为 data)
    #[serde(rename = "data")]
    pub rows: Vec<RowRecord>,

    /// 数据行数, 恒等于 rows.len()
    pub total_rows: usize,
}

impl SheetResult {
    pub fn new(sheet_name: impl Into<String>, schema: Vec<ColumnSchema>, rows: Vec<RowRecord>) -> Self {
        let total_rows = rows.len();
        Self {
            sheet_name: sheet_name.into(),
            schema,
            rows,
            total_rows,
        }
    }
}

// ==========================================
// ProcessingResult - 整个文件的处理结果
// ==========================================
// 无有效数据的工作表不出现在 sheets 中
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    /// 原始文件名
    pub file_name: String,

    /// 有数据的工作表结果, 保持工作簿顺序
    pub sheets: Vec<SheetResult>,
}
