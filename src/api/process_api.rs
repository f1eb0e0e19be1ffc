// ==========================================
// Excel 数据提取服务 - 同步处理 API
// ==========================================
// 职责: 封装"上传即处理"路径: 扩展名校验 → 提取 → 空结果判定
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::record::ProcessingResult;
use crate::extractor::ExcelProcessor;
use std::path::Path;
use tracing::{info, instrument, warn};

/// 受支持的表格扩展名
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// 同步处理 API
pub struct ProcessApi {
    processor: ExcelProcessor,
}

impl ProcessApi {
    pub fn new() -> Self {
        Self {
            processor: ExcelProcessor::new(),
        }
    }

    /// 处理一次上传
    ///
    /// # 参数
    /// - file_name: 上传时的原始文件名 (用于扩展名校验与结果回写)
    /// - bytes: 文件完整字节
    ///
    /// # 返回
    /// - Ok(ProcessingResult): 至少一个工作表产出数据
    /// - Err(ApiError): 稳定错误码见 error.rs
    #[instrument(skip(self, bytes), fields(file_name = %file_name))]
    pub fn process_upload(&self, file_name: &str, bytes: &[u8]) -> ApiResult<ProcessingResult> {
        if !Self::has_supported_extension(file_name) {
            warn!("拒绝不支持的文件格式");
            return Err(ApiError::InvalidFileFormat);
        }

        let result = self.processor.process_bytes(bytes, file_name)?;

        if result.sheets.is_empty() {
            warn!("文件未产出任何数据");
            return Err(ApiError::NoDataProcessed);
        }

        info!(sheets = result.sheets.len(), "同步处理成功");
        Ok(result)
    }

    fn has_supported_extension(file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let lower = ext.to_lowercase();
                SUPPORTED_EXTENSIONS.contains(&lower.as_str())
            })
            .unwrap_or(false)
    }
}

impl Default for ProcessApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check_accepts_supported() {
        assert!(ProcessApi::has_supported_extension("报表.xlsx"));
        assert!(ProcessApi::has_supported_extension("data.XLS"));
    }

    #[test]
    fn test_extension_check_rejects_others() {
        assert!(!ProcessApi::has_supported_extension("data.csv"));
        assert!(!ProcessApi::has_supported_extension("noext"));
        assert!(!ProcessApi::has_supported_extension("archive.xlsx.zip"));
    }

    #[test]
    fn test_bad_extension_returns_invalid_format() {
        let api = ProcessApi::new();
        let err = api.process_upload("data.txt", b"whatever").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FILE_FORMAT");
    }

    #[test]
    fn test_corrupt_bytes_return_file_corrupt() {
        let api = ProcessApi::new();
        let err = api.process_upload("data.xlsx", b"not an xlsx").unwrap_err();
        assert_eq!(err.error_code(), "FILE_CORRUPT");
    }
}
