use std::io::Cursor;

use docx_rs::{
    read_docx, DocumentChild, Justification, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};

use crate::application::ports::{CodecError, DocumentCodec};
use crate::domain::{TranslationUnit, UnitAddress};

/// Word-processor codec. Units are paragraphs: all top-level paragraphs in
/// document order, then every table's cell paragraphs, table by table, rows
/// top-to-bottom, cells left-to-right. Empty paragraphs still produce units
/// so progress accounting stays stable.
pub struct DocxCodec;

impl DocumentCodec for DocxCodec {
    fn extract(&self, data: &[u8]) -> Result<Vec<TranslationUnit>, CodecError> {
        let docx = read_docx(data).map_err(|e| CodecError::DecodeFailed(e.to_string()))?;

        let mut units = Vec::new();

        let mut paragraph_index = 0usize;
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                units.push(TranslationUnit::new(
                    UnitAddress::Paragraph {
                        index: paragraph_index,
                    },
                    paragraph_text(paragraph),
                ));
                paragraph_index += 1;
            }
        }

        let mut table_index = 0usize;
        for child in &docx.document.children {
            if let DocumentChild::Table(table) = child {
                collect_table_units(table, table_index, &mut units);
                table_index += 1;
            }
        }

        Ok(units)
    }

    fn reinsert(
        &self,
        data: &[u8],
        units: &[TranslationUnit],
        force_rtl: bool,
    ) -> Result<Vec<u8>, CodecError> {
        let mut docx = read_docx(data).map_err(|e| CodecError::DecodeFailed(e.to_string()))?;

        let mut cursor = UnitCursor::new(units);

        let mut paragraph_index = 0usize;
        for child in docx.document.children.iter_mut() {
            if let DocumentChild::Paragraph(paragraph) = child {
                let unit = cursor.next(UnitAddress::Paragraph {
                    index: paragraph_index,
                })?;
                apply_unit(paragraph, unit, force_rtl);
                paragraph_index += 1;
            }
        }

        let mut table_index = 0usize;
        for child in docx.document.children.iter_mut() {
            if let DocumentChild::Table(table) = child {
                apply_table_units(table, table_index, &mut cursor, force_rtl)?;
                table_index += 1;
            }
        }

        cursor.finish()?;

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| CodecError::EncodeFailed(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

/// Concatenated run text of a paragraph, the same view python-docx exposes as
/// `paragraph.text`.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn collect_table_units(table: &Table, table_index: usize, units: &mut Vec<TranslationUnit>) {
    for (row_index, row_child) in table.rows.iter().enumerate() {
        let TableChild::TableRow(row) = row_child;
        for (cell_index, cell_child) in row.cells.iter().enumerate() {
            let TableRowChild::TableCell(cell) = cell_child;
            let mut cell_paragraph_index = 0usize;
            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    units.push(TranslationUnit::new(
                        UnitAddress::TableCell {
                            table: table_index,
                            row: row_index,
                            cell: cell_index,
                            paragraph: cell_paragraph_index,
                        },
                        paragraph_text(paragraph),
                    ));
                    cell_paragraph_index += 1;
                }
            }
        }
    }
}

fn apply_table_units(
    table: &mut Table,
    table_index: usize,
    cursor: &mut UnitCursor<'_>,
    force_rtl: bool,
) -> Result<(), CodecError> {
    for (row_index, row_child) in table.rows.iter_mut().enumerate() {
        let TableChild::TableRow(row) = row_child;
        for (cell_index, cell_child) in row.cells.iter_mut().enumerate() {
            let TableRowChild::TableCell(cell) = cell_child;
            let mut cell_paragraph_index = 0usize;
            for content in cell.children.iter_mut() {
                if let TableCellContent::Paragraph(paragraph) = content {
                    let unit = cursor.next(UnitAddress::TableCell {
                        table: table_index,
                        row: row_index,
                        cell: cell_index,
                        paragraph: cell_paragraph_index,
                    })?;
                    apply_unit(paragraph, unit, force_rtl);
                    cell_paragraph_index += 1;
                }
            }
        }
    }
    Ok(())
}

/// Replace a non-empty paragraph's runs with a single run holding the unit
/// text. Right alignment is forced for every non-empty paragraph when the
/// target language is right-to-left, regardless of whether the unit's
/// translation succeeded.
fn apply_unit(paragraph: &mut Paragraph, unit: &TranslationUnit, force_rtl: bool) {
    if paragraph_text(paragraph).trim().is_empty() {
        return;
    }
    paragraph
        .children
        .retain(|child| !matches!(child, ParagraphChild::Run(_)));
    paragraph.children.push(ParagraphChild::Run(Box::new(
        Run::new().add_text(unit.text.as_str()),
    )));
    if force_rtl {
        paragraph.property.alignment = Some(Justification::new("right"));
    }
}

/// Walks the supplied units in lockstep with the document walk, enforcing
/// that no unit is dropped, reordered, or duplicated.
struct UnitCursor<'a> {
    units: &'a [TranslationUnit],
    position: usize,
}

impl<'a> UnitCursor<'a> {
    fn new(units: &'a [TranslationUnit]) -> Self {
        Self { units, position: 0 }
    }

    fn next(&mut self, expected: UnitAddress) -> Result<&'a TranslationUnit, CodecError> {
        let unit = self
            .units
            .get(self.position)
            .ok_or(CodecError::UnitMismatch {
                expected: self.position + 1,
                actual: self.units.len(),
            })?;
        if unit.address != expected {
            return Err(CodecError::EncodeFailed(format!(
                "unit address out of order at position {}",
                self.position
            )));
        }
        self.position += 1;
        Ok(unit)
    }

    fn finish(&self) -> Result<(), CodecError> {
        if self.position != self.units.len() {
            return Err(CodecError::UnitMismatch {
                expected: self.position,
                actual: self.units.len(),
            });
        }
        Ok(())
    }
}
