// ==========================================
// Excel 数据提取服务 - 表头探测器
// ==========================================
// 职责: 基于非空单元格密度选出最可能的表头行
// 规则: 非空数 ≤1 的行视为标题/注释, 不参与竞选;
//       最大非空数获胜, 并列时取行号最小者
// ==========================================

use crate::domain::cell::CellValue;
use crate::engine::grid::Grid;

/// 表头探测结果: 表头行下标、列名与其后的数据行
#[derive(Debug, Clone)]
pub struct HeaderSplit {
    /// 被选中的表头行下标 (0 起)
    pub header_index: usize,

    /// 表头单元格强制转文本后的列名, 空单元格为 ""
    pub columns: Vec<String>,

    /// 表头行之后的全部数据行 (表头之前的行被丢弃)
    pub data_rows: Vec<Vec<Option<CellValue>>>,
}

pub struct HeaderDetector;

impl HeaderDetector {
    /// 探测表头行并切分网格
    ///
    /// # 返回
    /// - Some(HeaderSplit): 找到表头
    /// - None: 没有任何行的非空数超过 1, 该工作表视为无数据
    pub fn detect(grid: &Grid) -> Option<HeaderSplit> {
        let mut best: Option<(usize, usize)> = None; // (行下标, 非空数)

        for (index, row) in grid.rows().enumerate() {
            let count = row.iter().filter(|cell| cell.is_some()).count();
            if count <= 1 {
                continue;
            }
            // 严格大于才更新, 从而保证并列时行号最小者获胜
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((index, count)),
            }
        }

        let (header_index, _) = best?;

        let columns = grid
            .row(header_index)
            .iter()
            .map(|cell| match cell {
                Some(value) => value.to_display_string(),
                None => String::new(),
            })
            .collect();

        let data_rows = grid
            .rows()
            .skip(header_index + 1)
            .map(|row| row.to_vec())
            .collect();

        Some(HeaderSplit {
            header_index,
            columns,
            data_rows,
        })
    }
}
