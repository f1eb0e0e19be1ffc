// ==========================================
// TypeInferencer 单元测试
// ==========================================

use excel_processor::{CellValue, ColumnType, TypeInferencer};

fn column(values: &[&str]) -> Vec<Vec<Option<CellValue>>> {
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                vec![None]
            } else {
                vec![Some(CellValue::Text(v.to_string()))]
            }
        })
        .collect()
}

#[test]
fn test_integer_column() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["1", "2", "3"]), 0),
        ColumnType::Integer
    );
}

#[test]
fn test_decimal_column() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["1.5", "2"]), 0),
        ColumnType::Decimal
    );
}

#[test]
fn test_datetime_column() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["2023-01-01", "2023-02-01"]), 0),
        ColumnType::DateTime
    );
}

#[test]
fn test_text_column() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["a", "b"]), 0),
        ColumnType::Text
    );
}

#[test]
fn test_all_empty_column_is_text() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["", "", ""]), 0),
        ColumnType::Text
    );
}

#[test]
fn test_type_is_all_or_nothing() {
    // 单个不合格值否决整列, 不产生逐格类型
    assert_eq!(
        TypeInferencer::infer_column(&column(&["1", "2", "三"]), 0),
        ColumnType::Text
    );
    assert_eq!(
        TypeInferencer::infer_column(&column(&["2023-01-01", "昨天"]), 0),
        ColumnType::Text
    );
}

#[test]
fn test_empties_do_not_disqualify() {
    assert_eq!(
        TypeInferencer::infer_column(&column(&["1", "", "2"]), 0),
        ColumnType::Integer
    );
}

#[test]
fn test_infer_all_is_per_column() {
    let rows = vec![
        vec![
            Some(CellValue::Text("甲".into())),
            Some(CellValue::Number(1.0)),
            Some(CellValue::Text("2023-01-01".into())),
        ],
        vec![
            Some(CellValue::Text("乙".into())),
            Some(CellValue::Number(2.5)),
            Some(CellValue::Text("2023-02-01".into())),
        ],
    ];

    let types = TypeInferencer::infer_all(&rows, 3);
    assert_eq!(
        types,
        vec![ColumnType::Text, ColumnType::Decimal, ColumnType::DateTime]
    );
}
