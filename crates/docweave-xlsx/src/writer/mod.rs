//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use docweave_core::xml::{escape, NS_R, NS_SPREADSHEET, XML_DECLARATION};
use docweave_core::{mime, rel_type, ContentTypes, PackageWriter, Relationships};

use crate::error::{XlsxError, XlsxResult};
use crate::workbook::Workbook;

/// Path of the workbook part inside the package
pub const WORKBOOK_PART: &str = "xl/workbook.xml";

/// Relationship IDs 1-3 of the workbook part are styles, theme and shared
/// strings; worksheets follow.
const FIRST_SHEET_REL: usize = 4;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        Self::check_not_empty(workbook)?;
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        Self::check_not_empty(workbook)?;
        log::debug!(
            "writing workbook: {} sheets, {} shared strings, {} cell formats",
            workbook.sheet_count(),
            workbook.shared_strings().unique_count(),
            workbook.styles.cell_xf_count()
        );

        let mut package = PackageWriter::new(writer);

        // [Content_Types].xml
        package.write_xml(
            "[Content_Types].xml",
            &Self::content_types(workbook).to_xml(),
        )?;

        // _rels/.rels
        Self::write_root_rels(&mut package)?;

        // docProps/core.xml and docProps/app.xml
        package.write_xml("docProps/core.xml", &workbook.properties.to_xml())?;
        package.write_xml("docProps/app.xml", &workbook.app_properties.to_xml())?;

        // xl/workbook.xml and its relationships
        package.write_xml(WORKBOOK_PART, &Self::workbook_xml(workbook))?;
        package.write_xml(
            "xl/_rels/workbook.xml.rels",
            &Self::workbook_rels(workbook).to_xml(),
        )?;

        // Worksheets
        for (i, sheet) in workbook.worksheets().enumerate() {
            package.write_xml(&format!("xl/worksheets/sheet{}.xml", i + 1), &sheet.to_xml())?;
        }

        // Auxiliary parts
        package.write_xml("xl/styles.xml", &workbook.styles.to_xml())?;
        package.write_xml("xl/theme/theme1.xml", &workbook.theme.to_xml())?;
        package.write_xml(
            "xl/sharedStrings.xml",
            &workbook.shared_strings().to_xml(),
        )?;

        package.finish()?;
        Ok(())
    }

    fn check_not_empty(workbook: &Workbook) -> XlsxResult<()> {
        if workbook.sheet_count() == 0 {
            return Err(XlsxError::EmptyWorkbook);
        }
        Ok(())
    }

    fn content_types(workbook: &Workbook) -> ContentTypes {
        let mut content_types = ContentTypes::new();
        content_types
            .add_default("xml", mime::XML)
            .add_default("rels", mime::RELATIONSHIPS)
            .add_default("png", mime::PNG)
            .add_default("jpeg", mime::JPEG)
            .add_default("jpg", mime::JPEG)
            .add_override("/xl/workbook.xml", mime::SHEET_WORKBOOK)
            .add_override("/xl/styles.xml", mime::SHEET_STYLES)
            .add_override("/xl/theme/theme1.xml", mime::THEME)
            .add_override("/xl/sharedStrings.xml", mime::SHEET_SHARED_STRINGS);
        for i in 1..=workbook.sheet_count() {
            content_types.add_override(
                &format!("/xl/worksheets/sheet{}.xml", i),
                mime::SHEET_WORKSHEET,
            );
        }
        content_types
            .add_override("/docProps/core.xml", mime::CORE_PROPERTIES)
            .add_override("/docProps/app.xml", mime::EXTENDED_PROPERTIES);
        content_types
    }

    fn write_root_rels<W: Write + Seek>(package: &mut PackageWriter<W>) -> XlsxResult<()> {
        let mut rels = Relationships::new();
        rels.add(rel_type::OFFICE_DOCUMENT, WORKBOOK_PART);
        rels.add(rel_type::CORE_PROPERTIES, "docProps/core.xml");
        rels.add(rel_type::EXTENDED_PROPERTIES, "docProps/app.xml");
        package.write_xml("_rels/.rels", &rels.to_xml())?;
        Ok(())
    }

    fn workbook_rels(workbook: &Workbook) -> Relationships {
        let mut rels = Relationships::new();
        rels.add(rel_type::STYLES, "styles.xml");
        rels.add(rel_type::THEME, "theme/theme1.xml");
        rels.add(rel_type::SHARED_STRINGS, "sharedStrings.xml");
        for i in 1..=workbook.sheet_count() {
            rels.add(rel_type::WORKSHEET, &format!("worksheets/sheet{}.xml", i));
        }
        rels
    }

    fn workbook_xml(workbook: &Workbook) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(XML_DECLARATION);
        xml.push_str(&format!(
            "\n<workbook xmlns=\"{}\" xmlns:r=\"{}\">",
            NS_SPREADSHEET, NS_R
        ));
        xml.push_str("\n  <workbookPr defaultThemeVersion=\"124226\"/>");
        xml.push_str("\n  <sheets>");
        for (i, sheet) in workbook.worksheets().enumerate() {
            xml.push_str(&format!(
                "\n    <sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>",
                escape(sheet.name()),
                sheet.sheet_id(),
                FIRST_SHEET_REL + i
            ));
        }
        xml.push_str("\n  </sheets>");
        xml.push_str("\n</workbook>");
        xml
    }
}
