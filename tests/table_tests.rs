//! Integration tests for the table builder.

use std::cell::RefCell;
use std::rc::Rc;

use mendeleev::data::{DataSource, Element, Series};
use mendeleev::table::{Placement, Surfaces, TableBuilder, TableError};

mod fixtures;
use fixtures::{element, sample_elements};

fn builder() -> TableBuilder {
    TableBuilder::new(Surfaces::attached(), None)
}

fn symbols(table: &TableBuilder) -> Vec<String> {
    table.cells().iter().map(|c| c.symbol().to_string()).collect()
}

#[test]
fn test_embedded_set_renders_every_element() {
    let data = DataSource::Embedded.load().unwrap();
    let mut table = builder();
    let cells = table.build(&data.elements);
    assert_eq!(cells.len(), 118);

    let surfaces = table.surfaces();
    assert_eq!(surfaces.main.as_ref().unwrap().len(), 88);
    let rows = table.series_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, Series::Lanthanide);
    assert_eq!(rows[0].1.len(), 15);
    assert_eq!(rows[1].0, Series::Actinide);
    assert_eq!(rows[1].1.len(), 15);
}

#[test]
fn test_cell_count_independent_of_input_order() {
    let set = sample_elements();
    let forward: Vec<&Element> = set.iter().collect();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(3);

    let mut expected = None;
    for order in [forward, reversed, rotated] {
        let mut table = builder();
        table.build(order);
        let got = symbols(&table);
        assert_eq!(got.len(), 8);
        match &expected {
            None => expected = Some(got),
            Some(first) => assert_eq!(&got, first),
        }
    }
}

#[test]
fn test_cells_ascending_by_atomic_number() {
    let set = sample_elements();
    let mut table = builder();
    table.build(&set);
    let numbers: Vec<u32> = table.cells().iter().map(|c| c.atomic_number()).collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    assert_eq!(numbers, sorted);
}

#[test]
fn test_series_rows_strictly_ascending() {
    let set = sample_elements();
    let mut reversed: Vec<&Element> = set.iter().collect();
    reversed.reverse();

    let mut table = builder();
    table.build(reversed);

    for (_, cells) in table.series_rows() {
        let numbers: Vec<u32> = cells.iter().map(|c| c.atomic_number()).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
    }
}

#[test]
fn test_hydrogen_top_left_and_lanthanum_in_series() {
    let set = sample_elements();
    let mut table = builder();
    table.build(&set);

    assert_eq!(table.cell_at(1, 1).unwrap().symbol(), "H");
    assert_eq!(table.cell_at(1, 18).unwrap().symbol(), "He");
    assert_eq!(
        table.cell("La").unwrap().placement(),
        Placement::Series {
            series: Series::Lanthanide,
            index: 0
        }
    );
    assert_eq!(
        table.cell("ce").unwrap().placement(),
        Placement::Series {
            series: Series::Lanthanide,
            index: 1
        }
    );
    assert!(table.cell("La").unwrap().placement().grid().is_none());
}

#[test]
fn test_build_is_idempotent() {
    let set = sample_elements();
    let mut once = builder();
    once.build(&set);

    let mut twice = builder();
    twice.build(&set);
    twice.build(&set);

    assert_eq!(symbols(&once), symbols(&twice));
    assert_eq!(once.series_rows().len(), twice.series_rows().len());
    assert_eq!(
        once.surfaces().main.as_ref().unwrap().len(),
        twice.surfaces().main.as_ref().unwrap().len()
    );
}

#[test]
fn test_missing_surface_renders_nothing() {
    let set = sample_elements();
    let surfaces = Surfaces {
        series: None,
        ..Surfaces::attached()
    };
    let mut table = TableBuilder::new(surfaces, None);

    assert!(table.build(&set).is_empty());
    assert!(matches!(
        table.try_build(&set),
        Err(TableError::MissingSurface { surface: "series-table" })
    ));
    assert!(table.cells().is_empty());
}

#[test]
fn test_empty_input_keeps_previous_render() {
    let set = sample_elements();
    let mut table = builder();
    table.build(&set);

    let nothing: Vec<&Element> = Vec::new();
    assert!(table.build(nothing.clone()).is_empty());
    assert!(matches!(table.try_build(nothing), Err(TableError::EmptyInput)));
    assert_eq!(table.cells().len(), 8);
}

#[test]
fn test_element_without_group_outside_series_is_skipped() {
    let loose = element("Xx", 120, 8, None);
    let h = element("H", 1, 1, Some(1));
    let mut table = builder();
    table.build([&loose, &h]);
    assert_eq!(symbols(&table), vec!["H"]);
}

#[test]
fn test_shared_slot_renders_every_element() {
    let h = element("H", 1, 1, Some(1));
    let d = element("D", 200, 1, Some(1));
    let mut table = builder();
    let cells = table.build([&d, &h]);
    assert_eq!(cells.len(), 2);

    assert_eq!(table.cell_at(1, 1).unwrap().symbol(), "H");
    assert!(table.cell("D").is_some());
    assert_eq!(table.surfaces().main.as_ref().unwrap().len(), 2);
}

#[test]
fn test_activation_reaches_detail_view() {
    let set = sample_elements();
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut table = TableBuilder::with_detail_view(move |e: &Element| {
        sink.borrow_mut().push(e.name.clone());
    });
    table.build(&set);

    assert!(table.activate("Fe"));
    assert!(!table.activate("Og"));
    assert_eq!(*seen.borrow(), vec!["Iron".to_string()]);
}

#[test]
fn test_activation_without_detail_view_is_noop() {
    let set = sample_elements();
    let mut table = builder();
    table.build(&set);

    assert!(!table.activate("H"));
    assert!(matches!(
        table.try_activate("H"),
        Err(TableError::MissingDetailView)
    ));
}
