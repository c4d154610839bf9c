//! Integration test: write index series to CSV and read them back.

use chrono::NaiveDate;
use naiad_io::write_indices;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn writes_three_column_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("indices.csv");

    let dates = vec![date(2000, 1, 1), date(2000, 1, 2)];
    write_indices(&path, &dates, &[0.0, 1.8], &[0.5, 0.5], None).expect("write succeeds");

    let contents = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        contents,
        "date,surface_index,gwlevel_index\n\
         2000-01-01,0,0.5\n\
         2000-01-02,1.8,0.5\n"
    );
}

#[test]
fn writes_four_column_output_with_blend() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("indices.csv");

    let dates = vec![date(2001, 6, 30), date(2001, 7, 1)];
    write_indices(
        &path,
        &dates,
        &[1.8, 0.0],
        &[0.5, 0.4],
        Some(&[1.15, 0.2]),
    )
    .expect("write succeeds");

    // Read back through the CSV reader and verify structure and values.
    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let header = reader.headers().expect("headers").clone();
    assert_eq!(
        header,
        csv::StringRecord::from(vec![
            "date",
            "surface_index",
            "gwlevel_index",
            "water_index"
        ])
    );

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "2001-06-30");
    assert_eq!(rows[0][1].parse::<f64>().unwrap(), 1.8);
    assert_eq!(rows[0][2].parse::<f64>().unwrap(), 0.5);
    assert_eq!(rows[0][3].parse::<f64>().unwrap(), 1.15);
    assert_eq!(&rows[1][0], "2001-07-01");
    assert_eq!(rows[1][3].parse::<f64>().unwrap(), 0.2);
}

#[test]
fn writes_header_only_for_empty_series() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");

    write_indices(&path, &[], &[], &[], None).expect("write succeeds");

    let contents = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "date,surface_index,gwlevel_index\n");
}
