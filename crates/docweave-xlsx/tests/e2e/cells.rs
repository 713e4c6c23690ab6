//! Cell content, shared strings and styles as they appear in the package.

use crate::{attribute_values, element_texts, read_part, write_to_vec};
use chrono::NaiveDate;
use docweave_xlsx::{
    BorderLineStyle, BorderStyle, CellData, Color, HorizontalAlignment, Style, Workbook,
};
use pretty_assertions::assert_eq;

#[test]
fn test_overwritten_string_keeps_its_shared_entry() {
    let mut wb = Workbook::new();
    {
        let mut sheet = wb.add_worksheet("Sheet1").unwrap();
        sheet.add_cell("A1", "Total").unwrap();
        sheet.add_cell("A1", "Sum").unwrap();
    }

    assert_eq!(wb.shared_strings().unique_count(), 2);
    let cell = wb.worksheet(0).unwrap().cell("A1").unwrap().unwrap();
    assert_eq!(cell.data, CellData::SharedString(1));
    assert_eq!(wb.shared_strings().get(1).unwrap(), "Sum");

    let bytes = write_to_vec(&wb);
    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert_eq!(element_texts(&sst, "t"), vec!["Total", "Sum"]);
    assert_eq!(attribute_values(&sst, "sst", "uniqueCount"), vec!["2"]);

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(attribute_values(&sheet, "c", "r"), vec!["A1"]);
    assert_eq!(attribute_values(&sheet, "c", "t"), vec!["s"]);
    assert_eq!(element_texts(&sheet, "v"), vec!["1"]);
}

#[test]
fn test_repeated_strings_share_one_index() {
    let mut wb = Workbook::new();
    {
        let mut sheet = wb.add_worksheet("Regions").unwrap();
        for row in 1..=5 {
            sheet.add_cell(&format!("A{}", row), "North").unwrap();
        }
        sheet.add_cell("B1", "South").unwrap();
    }
    let bytes = write_to_vec(&wb);

    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert_eq!(attribute_values(&sst, "sst", "count"), vec!["6"]);
    assert_eq!(attribute_values(&sst, "sst", "uniqueCount"), vec!["2"]);

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(element_texts(&sheet, "v"), vec!["0", "1", "0", "0", "0", "0"]);
}

#[test]
fn test_cell_kinds() {
    let mut wb = Workbook::new();
    {
        let mut sheet = wb.add_worksheet("Mixed").unwrap();
        sheet.add_cell("A1", 3).unwrap();
        sheet.add_cell("A2", 4.25).unwrap();
        sheet.add_cell("A3", false).unwrap();
        sheet
            .add_cell("A4", NaiveDate::from_ymd_opt(1900, 1, 1).unwrap())
            .unwrap();
        sheet.set_cell_formula("A5", "=A1+A2").unwrap();
        sheet.add_cell("A6", "it's <fine> & \"quoted\"").unwrap();
    }
    let bytes = write_to_vec(&wb);
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert_eq!(element_texts(&sheet, "v"), vec!["3", "4.25", "0", "1", "0"]);
    assert_eq!(element_texts(&sheet, "f"), vec!["A1+A2"]);
    assert_eq!(attribute_values(&sheet, "c", "t"), vec!["b", "s"]);

    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert_eq!(element_texts(&sst, "t"), vec!["it's <fine> & \"quoted\""]);
}

#[test]
fn test_rows_columns_and_merges() {
    let mut wb = Workbook::new();
    {
        let mut sheet = wb.add_worksheet("Layout").unwrap();
        sheet.add_cell("C10", "late").unwrap();
        sheet.add_cell("A2", "early").unwrap();
        sheet.add_column(1, 3, 18.0).unwrap();
        sheet.add_column(0, 0, 6.0).unwrap().set_hidden(true);
        sheet.set_row_height(0, 28.5).unwrap();
        sheet.set_row_hidden(4, true).unwrap();
        sheet.merge_cells("A1", "D1").unwrap();
    }
    let bytes = write_to_vec(&wb);
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert_eq!(attribute_values(&sheet, "row", "r"), vec!["1", "2", "5", "10"]);
    assert_eq!(attribute_values(&sheet, "row", "ht"), vec!["28.5"]);
    assert_eq!(attribute_values(&sheet, "row", "hidden"), vec!["1"]);
    assert_eq!(attribute_values(&sheet, "col", "min"), vec!["1", "2"]);
    assert_eq!(attribute_values(&sheet, "col", "max"), vec!["1", "4"]);
    assert_eq!(attribute_values(&sheet, "mergeCell", "ref"), vec!["A1:D1"]);

    let cols = sheet.find("<cols>").unwrap();
    let data = sheet.find("<sheetData>").unwrap();
    let merges = sheet.find("<mergeCells").unwrap();
    assert!(cols < data && data < merges);
}

#[test]
fn test_styles_in_package() {
    let mut wb = Workbook::new();
    let header = wb.create_style(
        &Style::new()
            .bold(true)
            .fill_color(Color::rgb(0xFF, 0xF2, 0xCC))
            .horizontal_alignment(HorizontalAlignment::Center)
            .border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK)),
    );
    let money = wb.create_style(&Style::new().number_format("#,##0.00 \"EUR\""));
    let percent = wb.create_style(&Style::new().number_format("0%"));
    {
        let mut sheet = wb.add_worksheet("Styled").unwrap();
        sheet.add_cell("A1", "Amount").unwrap().set_style(header);
        sheet.add_cell("A2", 10).unwrap().set_style(money);
        sheet.add_cell("A3", 0.5).unwrap();
        sheet.set_cell_style("A3", percent).unwrap();
    }
    let bytes = write_to_vec(&wb);

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(
        attribute_values(&sheet, "c", "s"),
        vec![header.to_string(), money.to_string(), percent.to_string()]
    );

    let styles = read_part(&bytes, "xl/styles.xml");
    assert_eq!(attribute_values(&styles, "numFmt", "numFmtId"), vec!["164"]);
    assert_eq!(
        attribute_values(&styles, "numFmt", "formatCode"),
        vec!["#,##0.00 \"EUR\""]
    );
    assert_eq!(attribute_values(&styles, "cellXfs", "count"), vec!["4"]);
    // cellStyleXfs entry, then the four cellXfs
    assert_eq!(
        attribute_values(&styles, "xf", "numFmtId"),
        vec!["0", "0", "0", "164", "9"]
    );
    assert_eq!(attribute_values(&styles, "fills", "count"), vec!["3"]);
    assert_eq!(
        attribute_values(&styles, "patternFill", "patternType"),
        vec!["none", "gray125", "solid"]
    );
}

#[test]
fn test_unregistered_style_index_is_written_unchecked() {
    // Style indices are not validated against cellXfs; the caller owns
    // keeping them in range.
    let mut wb = Workbook::new();
    wb.add_worksheet("Loose")
        .unwrap()
        .set_cell_style("B2", 42)
        .unwrap();
    let bytes = write_to_vec(&wb);

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(attribute_values(&sheet, "c", "s"), vec!["42"]);
    let styles = read_part(&bytes, "xl/styles.xml");
    assert_eq!(attribute_values(&styles, "cellXfs", "count"), vec!["1"]);
}

#[test]
fn test_named_style_in_package() {
    let mut wb = Workbook::new();
    let note = wb
        .create_named_style("Note", &Style::new().fill_color(Color::rgb(0xFF, 0xFF, 0xCC)))
        .unwrap();
    assert!(wb.create_named_style("note", &Style::new()).is_err());
    {
        let mut sheet = wb.add_worksheet("Notes").unwrap();
        sheet.add_cell("A1", "check totals").unwrap().set_style(note);
    }
    let bytes = write_to_vec(&wb);

    let styles = read_part(&bytes, "xl/styles.xml");
    assert_eq!(
        attribute_values(&styles, "cellStyle", "name"),
        vec!["Normal", "Note"]
    );
    assert_eq!(attribute_values(&styles, "cellStyle", "xfId"), vec!["0", "1"]);
    assert_eq!(attribute_values(&styles, "cellStyleXfs", "count"), vec!["2"]);

    // cellStyleXfs entries carry no xfId; the cell format points at the named one.
    assert_eq!(attribute_values(&styles, "xf", "xfId"), vec!["0", "1"]);
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(attribute_values(&sheet, "c", "s"), vec![note.to_string()]);
}
