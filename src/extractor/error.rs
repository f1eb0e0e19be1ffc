// ==========================================
// Excel 数据提取服务 - 提取层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 文件缺失与文件损坏是两类不同错误
// ==========================================

use thiserror::Error;

/// 提取层错误类型
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 源文件不存在 (仅异步路径可能出现)
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    /// 字节流无法解析为受支持的表格容器 (格式不支持、压缩包损坏等)
    #[error("文件解析失败: {0}")]
    Format(String),

    /// 底层 IO 错误
    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ExtractError {
    fn from(err: calamine::Error) -> Self {
        ExtractError::Format(err.to_string())
    }
}

/// Result 类型别名
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calamine_error_maps_to_format() {
        let err: ExtractError = calamine::Error::Msg("bad zip").into();
        match err {
            ExtractError::Format(msg) => assert!(msg.contains("bad zip")),
            other => panic!("expected Format, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_is_distinct_from_format() {
        let err = ExtractError::FileNotFound("a.xlsx".into());
        assert!(err.to_string().contains("文件不存在"));
    }
}
