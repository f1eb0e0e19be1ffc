// ==========================================
// Excel 数据提取服务 - 合并单元格填充器
// ==========================================
// 职责: 逐列自上而下, 用最近的前值填充空单元格
// 约束: 不跨列取值, 无前值的单元格保持为空
// 输出: 维度相同的新网格
// ==========================================

use crate::domain::cell::CellValue;
use crate::engine::grid::Grid;

pub struct MergeFiller;

impl MergeFiller {
    /// 前向填充
    ///
    /// 合并单元格在原始读取中只有左上角保留值,
    /// 其余渲染为空; 此处按列携带前值补齐。
    pub fn fill(grid: &Grid) -> Grid {
        let width = grid.width();
        let mut carried: Vec<Option<CellValue>> = vec![None; width];
        let mut filled_rows = Vec::with_capacity(grid.height());

        for row in grid.rows() {
            let mut filled_row = Vec::with_capacity(width);
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Some(value) => {
                        carried[col] = Some(value.clone());
                        filled_row.push(Some(value.clone()));
                    }
                    None => filled_row.push(carried[col].clone()),
                }
            }
            filled_rows.push(filled_row);
        }

        Grid::from_rows(filled_rows)
    }
}
