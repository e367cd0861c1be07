//! End-to-end command execution against seed and file datasets.

use super::helpers::{PARIS, Workspace};
use super::*;
use crate::dataset::Dataset;
use crate::list::{ListConfig, execute_list};
use crate::query::{QueryConfig, execute_query};
use crate::show::{ShowConfig, execute_show};
use rstest::rstest;
use salon_core::{PoiId, SelectionError, SheetPosition, Viewport, seed};

fn output_lines(config: &ListConfig) -> Vec<String> {
    let mut buffer = Vec::new();
    execute_list(config, &mut buffer).expect("list succeeds");
    String::from_utf8(buffer)
        .expect("utf-8 output")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[rstest]
fn lists_the_seed_salons_in_order() {
    let lines = output_lines(&ListConfig {
        dataset: Dataset::Seed,
    });
    assert_eq!(lines.len(), 5);
    let first = lines.first().expect("first line");
    assert!(first.starts_with("1\tSalon Belle Tresse\t5.3650,-4.0083\t4.8 (124 reviews)"));
    assert!(lines.last().expect("last line").starts_with("5\tCoupe & Co\t"));
}

#[rstest]
fn lists_a_file_dataset() {
    let workspace = Workspace::new();
    let path = workspace.write("paris.json", PARIS);
    let lines = output_lines(&ListConfig {
        dataset: Dataset::File(path),
    });
    let ids: Vec<_> = lines
        .iter()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(ids, ["p1", "p2"]);
}

#[rstest]
fn query_renders_visible_markers() {
    let config = QueryConfig {
        dataset: Dataset::Seed,
        viewport: Viewport::around(5.36, -4.0083, 0.01, 0.01).expect("valid viewport"),
        open: None,
    };
    let model = execute_query(&config).expect("query succeeds");
    let ids: Vec<_> = model.markers.iter().map(|marker| marker.id.as_str()).collect();
    assert_eq!(ids, ["1"]);
    assert_eq!(model.sheet, SheetPosition::Hidden);
    assert_eq!(model.recenter, seed::default_anchor().center());
}

#[rstest]
fn query_can_open_a_detail_sheet() {
    let config = QueryConfig {
        dataset: Dataset::Seed,
        viewport: seed::default_anchor(),
        open: Some(PoiId::from("2")),
    };
    let model = execute_query(&config).expect("query succeeds");
    assert_eq!(model.sheet, SheetPosition::Expanded);
    let detail = model.detail.expect("detail open");
    assert_eq!(detail.name(), "Élégance Coiffure");
    assert!(
        model
            .markers
            .iter()
            .any(|marker| marker.highlighted && marker.id.as_str() == "2")
    );
}

#[rstest]
fn query_rejects_unknown_salons() {
    let config = QueryConfig {
        dataset: Dataset::Seed,
        viewport: seed::default_anchor(),
        open: Some(PoiId::from("missing")),
    };
    let err = execute_query(&config).expect_err("unknown salon");
    match err {
        CliError::Selection(SelectionError::UnknownId { id }) => {
            assert_eq!(id, PoiId::from("missing"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn query_output_is_json() {
    let config = QueryConfig {
        dataset: Dataset::Seed,
        viewport: seed::default_anchor(),
        open: None,
    };
    let model = execute_query(&config).expect("query succeeds");
    let mut buffer = Vec::new();
    write_json(&mut buffer, &model).expect("write succeeds");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
    let markers = value
        .get("markers")
        .and_then(serde_json::Value::as_array)
        .expect("markers array");
    assert_eq!(markers.len(), 2);
}

#[rstest]
fn show_renders_record_and_actions() {
    let config = ShowConfig {
        dataset: Dataset::Seed,
        id: PoiId::from("1"),
    };
    let sheet = execute_show(&config).expect("show succeeds");
    assert_eq!(sheet.salon.name, "Salon Belle Tresse");
    assert_eq!(sheet.salon.reviews, 124);
    assert_eq!(
        sheet.actions.directions,
        "https://www.google.com/maps/dir/?api=1&destination=5.365,-4.0083"
    );
    assert_eq!(sheet.actions.call, "tel:+2250708123456");
    assert_eq!(
        sheet.actions.share,
        "Découvrez Salon Belle Tresse à Boulevard Latrille, Cocody, Abidjan"
    );
}

#[rstest]
fn show_reports_unknown_ids() {
    let config = ShowConfig {
        dataset: Dataset::Seed,
        id: PoiId::from("42"),
    };
    let err = execute_show(&config).expect_err("unknown id");
    assert!(
        matches!(err, CliError::Store(salon_core::StoreError::NotFound { .. })),
        "unexpected {err:?}"
    );
}
