// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use intake_core::{IntakeError, OpenOptions, PartitionData, Plugin, SourceState};
use intake_csv::CsvPlugin;
use intake_test_utils::Fixtures;
use serde_json::json;

const PEOPLE: &str = "name,age,score,active\nada,36,1.5,true\nbob,41,2,false\ncy,29,,true\n";

fn options(value: serde_json::Value) -> OpenOptions {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("options must be an object"),
    }
}

fn frame(data: PartitionData) -> intake_core::Frame {
    match data {
        PartitionData::Frame(frame) => frame,
        other => panic!("expected a frame, got {other:?}"),
    }
}

#[test]
fn schema_reports_columns_and_inferred_types() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("people.csv", PEOPLE).unwrap();

    let mut source = CsvPlugin
        .open(path.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    assert_eq!(source.state(), SourceState::Created);

    let schema = source.discover().unwrap();
    assert_eq!(
        schema.dtype,
        json!({"name": "string", "age": "int64", "score": "float64", "active": "bool"})
    );
    assert_eq!(schema.shape, vec![None, Some(4)]);
    assert_eq!(schema.npartitions, 1);
    assert_eq!(schema.extra_metadata["columns"], json!(["name", "age", "score", "active"]));
    assert_eq!(source.state(), SourceState::Open);
}

#[test]
fn read_returns_typed_rows() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("people.csv", PEOPLE).unwrap();

    let mut source = CsvPlugin
        .open(path.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    let frame = frame(source.read().unwrap());

    assert_eq!(frame.columns, vec!["name", "age", "score", "active"]);
    assert_eq!(frame.rows.len(), 3);
    assert_eq!(frame.rows[0], vec![json!("ada"), json!(36), json!(1.5), json!(true)]);
    assert_eq!(frame.rows[2][2], serde_json::Value::Null);
}

#[test]
fn blocksize_partitions_cover_every_row_once() {
    let fixtures = Fixtures::new().unwrap();
    let mut content = String::from("id,label\n");
    for i in 0..50 {
        content.push_str(&format!("{i},row{i}\n"));
    }
    let path = fixtures.write("big.csv", &content).unwrap();

    let mut source = CsvPlugin
        .open(path.to_str().unwrap(), options(json!({"blocksize": 64})))
        .unwrap();
    let schema = source.discover().unwrap();
    assert!(schema.npartitions > 1);

    let mut ids = Vec::new();
    for index in 0..schema.npartitions {
        let part = frame(source.partition(index).unwrap());
        ids.extend(part.rows.iter().map(|row| row[0].as_i64().unwrap()));
    }
    assert_eq!(ids, (0..50).collect::<Vec<i64>>());

    let whole = frame(source.read().unwrap());
    assert_eq!(whole.rows.len(), 50);
}

#[test]
fn glob_location_reads_files_in_sorted_order() {
    let fixtures = Fixtures::new().unwrap();
    fixtures.write("part-2.csv", "x\n3\n4\n").unwrap();
    fixtures.write("part-1.csv", "x\n1\n2\n").unwrap();
    fixtures.write("notes.txt", "not csv").unwrap();

    let pattern = fixtures.path().join("part-*.csv");
    let mut source = CsvPlugin
        .open(pattern.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    let schema = source.discover().unwrap();
    assert_eq!(schema.npartitions, 2);

    let whole = frame(source.read().unwrap());
    let values: Vec<_> = whole.rows.iter().map(|row| row[0].clone()).collect();
    assert_eq!(values, vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn quoted_newline_in_header_stays_in_the_header() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures
        .write("quoted.csv", "\"first\nname\",age\nada,36\nbob,41\n")
        .unwrap();

    for opts in [json!({}), json!({"blocksize": 4})] {
        let mut source = CsvPlugin
            .open(path.to_str().unwrap(), options(opts.clone()))
            .unwrap();
        let whole = frame(source.read().unwrap());
        assert_eq!(whole.columns, vec!["first\nname", "age"], "{opts}");
        assert_eq!(
            whole.rows,
            vec![vec![json!("ada"), json!(36)], vec![json!("bob"), json!(41)]],
            "{opts}"
        );
    }
}

#[test]
fn repeated_header_names_are_suffixed() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("dupes.csv", "a,a,b\n1,x,2\n").unwrap();

    let mut source = CsvPlugin
        .open(path.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    let schema = source.discover().unwrap();
    assert_eq!(
        schema.dtype,
        json!({"a": "int64", "a.1": "string", "b": "int64"})
    );
    assert_eq!(schema.dtype.as_object().unwrap().len(), 3);
    assert_eq!(schema.shape, vec![None, Some(3)]);
    assert_eq!(schema.extra_metadata["columns"], json!(["a", "a.1", "b"]));
}

#[test]
fn headerless_files_get_generated_or_given_names() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("raw.csv", "1;a\n2;b\n").unwrap();
    let location = path.to_str().unwrap();

    let mut generated = CsvPlugin
        .open(location, options(json!({"has_header": false, "delimiter": ";"})))
        .unwrap();
    let frame_generated = frame(generated.read().unwrap());
    assert_eq!(frame_generated.columns, vec!["column_0", "column_1"]);
    assert_eq!(frame_generated.rows.len(), 2);

    let mut named = CsvPlugin
        .open(
            location,
            options(json!({"has_header": false, "delimiter": ";", "columns": ["n", "s"]})),
        )
        .unwrap();
    let frame_named = frame(named.read().unwrap());
    assert_eq!(frame_named.columns, vec!["n", "s"]);
    assert_eq!(frame_named.rows[1], vec![json!(2), json!("b")]);
}

#[test]
fn metadata_option_is_exposed_on_the_source() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("people.csv", PEOPLE).unwrap();

    let source = CsvPlugin
        .open(
            path.to_str().unwrap(),
            options(json!({"metadata": {"owner": "data-team"}})),
        )
        .unwrap();
    assert_eq!(source.metadata()["owner"], json!("data-team"));
}

#[test]
fn missing_files_fail_schema_computation() {
    let fixtures = Fixtures::new().unwrap();
    let pattern = fixtures.path().join("absent-*.csv");

    let mut source = CsvPlugin
        .open(pattern.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    let err = source.discover().unwrap_err();
    assert!(matches!(err, IntakeError::SchemaComputation { .. }), "{err}");
}

#[test]
fn remote_locations_are_rejected_at_schema_time() {
    let mut source = CsvPlugin
        .open("s3://bucket/data.csv", OpenOptions::new())
        .unwrap();
    let err = source.discover().unwrap_err();
    assert!(err.to_string().contains("s3://"), "{err}");
}

#[test]
fn unknown_or_invalid_options_fail_at_open() {
    let err = CsvPlugin
        .open("data.csv", options(json!({"sep": ","})))
        .unwrap_err();
    assert!(matches!(err, IntakeError::InvalidConfiguration(_)), "{err}");

    let err = CsvPlugin
        .open("data.csv", options(json!({"delimiter": "::"})))
        .unwrap_err();
    assert!(matches!(err, IntakeError::InvalidConfiguration(_)), "{err}");
}

#[test]
fn close_releases_the_layout() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write("people.csv", PEOPLE).unwrap();

    let mut source = CsvPlugin
        .open(path.to_str().unwrap(), OpenOptions::new())
        .unwrap();
    source.discover().unwrap();
    source.close();

    assert!(source.is_closed());
    assert!(matches!(source.read(), Err(IntakeError::SourceClosed)));
}
