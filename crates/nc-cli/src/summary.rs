//! Rendering of a parsed header as human-readable tables.
//!
//! Type-code labels here are presentation only; the core stores codes raw
//! and this module never feeds interpretation back into it.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use nc_header::{Attribute, Header, Variable};

/// Longest attribute-value preview before truncation.
const PREVIEW_LEN: usize = 40;

/// Print the full header summary to stdout.
pub fn print_header(header: &Header, show_attributes: bool) {
    println!("Format: {}", header.format);
    if header.is_streaming() {
        println!("Records: streaming");
    } else {
        println!("Records: {}", header.num_recs);
    }

    if !header.dimensions.is_empty() {
        println!("Dimensions:");
        println!("{}", dimension_table(header));
    }
    if show_attributes && !header.attributes.is_empty() {
        println!("Global attributes:");
        println!("{}", attribute_table(&header.attributes));
    }
    if !header.variables.is_empty() {
        println!("Variables:");
        println!("{}", variable_table(header, show_attributes));
    }
}

/// Dimension table: name and length, `unlimited` for the record dimension.
pub fn dimension_table(header: &Header) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Length"]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (id, dim) in header.dimensions.iter().enumerate() {
        let length = if dim.is_record() {
            "unlimited".to_string()
        } else {
            dim.length.to_string()
        };
        table.add_row(vec![Cell::new(id), Cell::new(&dim.name), Cell::new(length)]);
    }
    table
}

/// Variable table: name, shape, type, per-record size, offset, attr count.
pub fn variable_table(header: &Header, with_attr_count: bool) -> Table {
    let mut table = Table::new();
    let mut columns = vec!["Name", "Shape", "Type", "VSize", "Offset"];
    if with_attr_count {
        columns.push("Attrs");
    }
    table.set_header(columns);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for var in &header.variables {
        let mut row = vec![
            Cell::new(&var.name),
            Cell::new(shape_label(var, header)),
            Cell::new(type_label(var.type_code)),
            Cell::new(var.vsize),
            Cell::new(var.offset),
        ];
        if with_attr_count {
            row.push(Cell::new(var.attributes.len()));
        }
        table.add_row(row);
    }
    table
}

/// Attribute table: name, type label and a short value preview.
pub fn attribute_table(attributes: &[Attribute]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Type", "Value"]);
    apply_table_style(&mut table);
    for attr in attributes {
        table.add_row(vec![
            Cell::new(&attr.name),
            Cell::new(type_label(attr.type_code)),
            Cell::new(value_preview(attr)),
        ]);
    }
    table
}

/// Shared table styling.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Display label for a numeric type code.
///
/// Codes 1-6 are the classic external types; anything else is shown raw.
pub fn type_label(code: u32) -> String {
    let label = match code {
        1 => "byte",
        2 => "char",
        3 => "short",
        4 => "int",
        5 => "float",
        6 => "double",
        other => return format!("type-{other}"),
    };
    label.to_string()
}

/// Shape label: dimension names where the IDs resolve, raw IDs otherwise.
///
/// IDs are not range-checked by the parser, so out-of-range references are
/// rendered as `#id` instead of panicking.
fn shape_label(var: &Variable, header: &Header) -> String {
    if var.dim_ids.is_empty() {
        return "scalar".to_string();
    }
    let parts: Vec<String> = var
        .dim_ids
        .iter()
        .map(|&id| match header.dimensions.get(id as usize) {
            Some(dim) => dim.name.clone(),
            None => format!("#{id}"),
        })
        .collect();
    parts.join(", ")
}

/// Short value preview: char payloads as text, everything else as a byte
/// count (the core keeps values opaque).
fn value_preview(attr: &Attribute) -> String {
    if attr.type_code == 2 {
        let text = String::from_utf8_lossy(&attr.values);
        if text.chars().count() > PREVIEW_LEN {
            let prefix: String = text.chars().take(PREVIEW_LEN).collect();
            return format!("{prefix}…");
        }
        return text.into_owned();
    }
    format!("{} bytes", attr.values.len())
}
