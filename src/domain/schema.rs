// ==========================================
// Excel 数据提取服务 - 列模式定义
// ==========================================
// 职责: 列的语义类型与下游契约的线上名称
// 约定: 线上名称与下游建表逻辑一致, 不得变更
// ==========================================

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ColumnType - 列语义类型
// ==========================================
// 每列只分配一个类型, 由类型推断引擎一次性确定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 文本 (默认类型)
    Text,
    /// 整数
    Integer,
    /// 小数 (固定精度 18,4)
    Decimal,
    /// 日期时间
    DateTime,
}

impl ColumnType {
    /// 下游契约使用的线上类型名称
    pub fn wire_name(&self) -> &'static str {
        match self {
            ColumnType::Text => "VARCHAR(255)",
            ColumnType::Integer => "INTEGER",
            ColumnType::Decimal => "DECIMAL(18, 4)",
            ColumnType::DateTime => "DATETIME",
        }
    }

    /// 从线上名称还原类型, 未知名称回退为文本
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "INTEGER" => ColumnType::Integer,
            "DECIMAL(18, 4)" => ColumnType::Decimal,
            "DATETIME" => ColumnType::DateTime,
            _ => ColumnType::Text,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

// 序列化为线上名称字符串 (与下游 Java 服务的建表 switch 对齐)
impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireNameVisitor;

        impl Visitor<'_> for WireNameVisitor {
            type Value = ColumnType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a column type wire name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ColumnType, E> {
                Ok(ColumnType::from_wire_name(v))
            }
        }

        deserializer.deserialize_str(WireNameVisitor)
    }
}

// ==========================================
// ColumnSchema - 单列模式
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// 列名 (来自表头行)
    pub name: String,

    /// 列类型
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}
