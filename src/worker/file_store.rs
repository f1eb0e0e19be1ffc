// ==========================================
// Excel 数据提取服务 - 共享存储访问
// ==========================================
// 职责: 按存储文件名定位源文件; 提交成功后尽力删除
// 约定: 跨服务的文件命名是隐式契约, 本层不做加锁
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 共享文件存储区
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 解析存储文件名为完整路径
    pub fn resolve(&self, stored_filename: &str) -> PathBuf {
        self.root.join(stored_filename)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 尽力删除源文件
    ///
    /// 删除失败只记录日志, 不向上传播, 任务仍视为完成。
    pub fn remove_best_effort(&self, stored_filename: &str) {
        let path = self.resolve(stored_filename);
        match fs::remove_file(&path) {
            Ok(()) => info!(file = %stored_filename, "源文件已删除"),
            Err(e) => warn!(file = %stored_filename, error = %e, "源文件删除失败"),
        }
    }
}
