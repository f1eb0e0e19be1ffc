// ==========================================
// Excel 数据提取服务 - 工作簿处理器
// ==========================================
// 职责: 打开工作簿 (字节流或路径), 按工作簿顺序逐表抽取
// 规则: 无数据的工作表整体省略; 工作簿级损坏中止整个文件
// ==========================================

use crate::domain::record::ProcessingResult;
use crate::engine::grid::Grid;
use crate::engine::sheet_extractor::SheetExtractor;
use crate::extractor::error::{ExtractError, ExtractResult};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info};

pub struct ExcelProcessor;

impl ExcelProcessor {
    pub fn new() -> Self {
        Self
    }

    /// 处理内存中的文件内容 (同步路径)
    ///
    /// # 参数
    /// - bytes: 上传文件的完整字节
    /// - file_name: 原始文件名, 原样写入处理结果
    pub fn process_bytes(&self, bytes: &[u8], file_name: &str) -> ExtractResult<ProcessingResult> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| ExtractError::Format(e.to_string()))?;
        self.process_workbook(workbook, file_name)
    }

    /// 处理存储区中的文件 (异步路径)
    ///
    /// 文件缺失返回 FileNotFound, 与解析失败区分。
    pub fn process_path(&self, path: &Path, file_name: &str) -> ExtractResult<ProcessingResult> {
        if !path.exists() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }

        let workbook =
            open_workbook_auto(path).map_err(|e| ExtractError::Format(e.to_string()))?;
        self.process_workbook(workbook, file_name)
    }

    fn process_workbook<RS, R>(&self, mut workbook: R, file_name: &str) -> ExtractResult<ProcessingResult>
    where
        RS: Read + Seek,
        R: Reader<RS, Error = calamine::Error>,
    {
        let sheet_names = workbook.sheet_names().to_owned();
        debug!(file = %file_name, sheets = sheet_names.len(), "工作簿打开成功");

        let mut sheets = Vec::new();
        for sheet_name in sheet_names {
            let range: Range<Data> = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| ExtractError::Format(e.to_string()))?;

            let grid = Grid::from_range(&range);
            if let Some(result) = SheetExtractor::extract(&sheet_name, &grid) {
                sheets.push(result);
            }
        }

        info!(
            file = %file_name,
            extracted_sheets = sheets.len(),
            "文件提取完成"
        );

        Ok(ProcessingResult {
            file_name: file_name.to_string(),
            sheets,
        })
    }
}

impl Default for ExcelProcessor {
    fn default() -> Self {
        Self::new()
    }
}
