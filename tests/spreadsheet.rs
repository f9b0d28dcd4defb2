use cucumber_doc::{
    error::SheetError, CellRef, Columns, Example, Labels, Scenario,
    ScenarioFormatter, Sheet, Step, Table, TableRow, Worksheet,
};

fn example() -> Example {
    Example {
        name: String::new(),
        table: Table::new(
            ["Var1", "Var2", "Var3", "Var4"],
            [
                TableRow::plain(["1", "2", "3", "4"]),
                TableRow::plain(["5", "6", "7", "8"]),
            ],
        )
        .unwrap(),
        ..Example::default()
    }
}

fn formatter(language: &str) -> ScenarioFormatter {
    ScenarioFormatter::new(Columns::default(), Labels::for_language(language))
}

#[test]
fn tags_description_and_example() {
    let scenario = Scenario {
        name: "Scenario with examples".into(),
        description: "Some description".into(),
        tags: vec!["tag1".into(), "tag2".into()],
        examples: vec![example()],
        ..Scenario::default()
    };
    let mut sheet = Sheet::new("Features");

    let next = formatter("en").format(&mut sheet, &scenario, 3).unwrap();

    assert_eq!(next, 11);
    assert_eq!(sheet.value("B3"), Ok(Some("Scenario with examples")));
    assert_eq!(sheet.value("C4"), Ok(Some("tag1, tag2")));
    assert_eq!(sheet.value("C5"), Ok(Some("Some description")));
    assert_eq!(sheet.value("B7"), Ok(Some("Examples")));
    for (cell, value) in [
        ("D8", "Var1"),
        ("G8", "Var4"),
        ("D9", "1"),
        ("G9", "4"),
        ("D10", "5"),
        ("G10", "8"),
    ] {
        assert_eq!(sheet.value(cell), Ok(Some(value)), "at {cell}");
    }
    assert_eq!(sheet.value("H8"), Ok(None));
    assert_eq!(sheet.value("D11"), Ok(None));
}

#[test]
fn steps_shift_examples_down() {
    let scenario = Scenario {
        name: "Scenario with steps".into(),
        description: "Some description".into(),
        steps: vec![
            Step::new("Given ", "a first step"),
            Step::new("When ", "a second step"),
            Step::new("Then ", "a third step"),
        ],
        examples: vec![example()],
        ..Scenario::default()
    };
    let mut sheet = Sheet::new("Features");

    let next = formatter("en").format(&mut sheet, &scenario, 3).unwrap();

    assert_eq!(next, 13);
    assert_eq!(sheet.value("C4"), Ok(Some("Some description")));
    assert_eq!(sheet.value("C5"), Ok(Some("Given")));
    assert_eq!(sheet.value("D7"), Ok(Some("a third step")));
    assert_eq!(sheet.value("B9"), Ok(Some("Examples")));
    assert_eq!(sheet.value("D10"), Ok(Some("Var1")));
    assert_eq!(sheet.last_row(), Some(12));
}

#[test]
fn examples_heading_is_localized() {
    let scenario = Scenario {
        name: "Scenario met voorbeelden".into(),
        examples: vec![example()],
        ..Scenario::default()
    };
    let mut sheet = Sheet::new("Functionaliteiten");

    let next = formatter("nl").format(&mut sheet, &scenario, 3).unwrap();

    assert_eq!(sheet.value("B5"), Ok(Some("Voorbeelden")));
    assert_eq!(next, 9);
}

#[test]
fn cursor_chains_scenarios_without_overlap() {
    let formatter = formatter("en");
    let mut sheet = Sheet::default();
    let scenarios = [
        Scenario {
            name: "First".into(),
            steps: vec![Step::new("Given ", "something")],
            ..Scenario::default()
        },
        Scenario {
            name: "Second".into(),
            examples: vec![example()],
            ..Scenario::default()
        },
        Scenario { name: "Third".into(), ..Scenario::default() },
    ];

    let mut row = 1;
    let mut starts = Vec::new();
    for scenario in &scenarios {
        starts.push(row);
        row = formatter.format(&mut sheet, scenario, row).unwrap();
    }

    assert_eq!(starts, [1, 4, 10]);
    assert_eq!(row, 12);
    assert_eq!(sheet.value("B4"), Ok(Some("Second")));
    assert_eq!(sheet.value("B10"), Ok(Some("Third")));
}

/// [`Worksheet`] remembering the order of writes.
#[derive(Default)]
struct Recorder(Vec<(String, String)>);

impl Worksheet for Recorder {
    fn set_value(
        &mut self,
        cell: CellRef,
        value: &str,
    ) -> Result<(), SheetError> {
        self.0.push((cell.to_string(), value.to_owned()));
        Ok(())
    }
}

#[test]
fn any_worksheet_can_be_written() {
    let scenario = Scenario {
        name: "Recorded".into(),
        tags: vec!["t".into()],
        steps: vec![Step::new("Given ", "<x>")],
        ..Scenario::default()
    };
    let mut recorder = Recorder::default();

    let next = formatter("en").format(&mut recorder, &scenario, 2).unwrap();

    assert_eq!(next, 6);
    let written: Vec<_> = recorder
        .0
        .iter()
        .map(|(cell, value)| (cell.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        written,
        [
            ("B2", "Recorded"),
            ("B3", "Tags:"),
            ("C3", "t"),
            ("C4", "Given"),
            ("D4", "<x>"),
        ],
    );
}

/// [`Worksheet`] rejecting every write.
struct ReadOnly;

impl Worksheet for ReadOnly {
    fn set_value(
        &mut self,
        cell: CellRef,
        _: &str,
    ) -> Result<(), SheetError> {
        Err(SheetError::InvalidReference { reference: cell.to_string() })
    }
}

#[test]
fn worksheet_errors_are_propagated() {
    let err = formatter("en")
        .format(&mut ReadOnly, &Scenario::default(), 1)
        .unwrap_err();

    assert_eq!(err, SheetError::InvalidReference { reference: "B1".into() });
}

/// [`Worksheet`] accepting writes at any row.
struct Unbounded;

impl Worksheet for Unbounded {
    fn set_value(&mut self, _: CellRef, _: &str) -> Result<(), SheetError> {
        Ok(())
    }
}

#[test]
fn cursor_overflow_is_an_error() {
    let scenario = Scenario {
        name: "Last".into(),
        steps: vec![Step::new("Given ", "no room left")],
        ..Scenario::default()
    };

    let err = formatter("en")
        .format(&mut Unbounded, &scenario, u32::MAX)
        .unwrap_err();

    assert_eq!(err, SheetError::OutOfBounds { row: u32::MAX, column: 2 });
}

#[test]
fn table_overflow_is_an_error() {
    let table = Table::from_rows([["a"], ["b"]]).unwrap();
    let formatter = cucumber_doc::spreadsheet::TableFormatter::new(
        Columns::default(),
        Labels::default(),
    );

    let err = formatter.format(&mut Unbounded, &table, u32::MAX).unwrap_err();

    assert_eq!(err, SheetError::OutOfBounds { row: u32::MAX, column: 4 });
}
