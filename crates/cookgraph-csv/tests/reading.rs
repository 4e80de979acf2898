//! Integration tests for reading tables from disk and from memory.
//!
//! These tests cover the file-based entry points (sync and async), quoting
//! of multi-valued cells, and the error values callers rely on to locate
//! the offending table and row.

use cookgraph_csv::{split_multi, Error, ReadOptions, Table, Warning, MULTI_VALUE_DELIMITER};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn create_temp_table(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

const NODES: &str = "\
nodeId,name,labels,category
R1,番茄炒蛋,Recipe,\"家常菜,快手菜\"
I1,鸡蛋,Ingredient,
";

#[tokio::test]
async fn read_async_matches_from_path() {
    let file = create_temp_table(NODES);
    let options = ReadOptions::default();

    let sync_table = Table::from_path(file.path(), &options).unwrap();
    let async_table = Table::read(file.path(), &options).await.unwrap();

    assert_eq!(sync_table.headers(), async_table.headers());
    assert_eq!(sync_table.rows(), async_table.rows());
}

#[tokio::test]
async fn table_name_is_file_name() {
    let file = create_temp_table(NODES);
    let table = Table::read(file.path(), &ReadOptions::default())
        .await
        .unwrap();

    let expected = file.path().file_name().unwrap().to_string_lossy();
    assert_eq!(table.name(), expected);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let result = Table::read(
        std::path::Path::new("/definitely/not/here/nodes.csv"),
        &ReadOptions::default(),
    )
    .await;
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn unicode_and_quoted_multi_values_survive() {
    let table = Table::from_reader("nodes", NODES.as_bytes(), &ReadOptions::default()).unwrap();
    let category = table.column("category").unwrap();
    let name = table.column("name").unwrap();

    let first = &table.rows()[0];
    assert_eq!(first.get(name), Some("番茄炒蛋"));

    let categories: Vec<_> =
        split_multi(first.get(category).unwrap(), MULTI_VALUE_DELIMITER).collect();
    assert_eq!(categories, ["家常菜", "快手菜"]);

    assert_eq!(table.rows()[1].get(category), None);
}

#[rstest]
#[case::single("Recipe", &["Recipe"])]
#[case::padded(" Recipe , Category ", &["Recipe", "Category"])]
#[case::trailing_delimiter("Recipe,", &["Recipe"])]
#[case::empty("", &[])]
#[case::only_delimiters(",,,", &[])]
fn split_multi_cases(#[case] cell: &str, #[case] expected: &[&str]) {
    let parts: Vec<_> = split_multi(cell, MULTI_VALUE_DELIMITER).collect();
    assert_eq!(parts, expected);
}

#[test]
fn warnings_are_reported_in_row_order() {
    let data = "a,b\n1\n,\n2,3\n";
    let table = Table::from_reader("t", data.as_bytes(), &ReadOptions::default()).unwrap();

    let rows: Vec<_> = table.warnings().iter().map(Warning::row).collect();
    assert_eq!(rows, [1, 2]);
}

#[test]
fn invalid_utf8_reports_row() {
    let mut data = b"a,b\n1,2\n".to_vec();
    data.extend_from_slice(b"3,\xff\xfe\n");

    let err = Table::from_reader("bad", data.as_slice(), &ReadOptions::default()).unwrap_err();
    match err {
        Error::Csv { table, row, .. } => {
            assert_eq!(table, "bad");
            assert_eq!(row, 2);
        }
        other => panic!("Expected Csv error, got {other:?}"),
    }
}
