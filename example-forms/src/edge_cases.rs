//! Schemas that exercise the loose corners of the format.

use dinaform::{FieldSpec, FormSchema, SectionSpec};

/// Sources that must render as an empty form.
pub const MALFORMED_SOURCES: &[&str] = &[
    "{",
    "42",
    r#"{"title": "T", "fields": {}}"#,
    r#"{"title": "T", "fields": [{"label": "no type"}]}"#,
    r#"{"title": "T", "sections": [{"title": "S", "from": "0", "to": 1, "index": 0}]}"#,
    "<html>not json</html>",
];

fn numbered_fields(n: usize) -> Vec<FieldSpec> {
    (0..n)
        .map(|i| FieldSpec::new("text", format!("Campo {i}")).with_name(format!("campo_{i}")))
        .collect()
}

/// Five fields; the second section overlaps the first on positions 2 and 3,
/// and position 4 is covered only by the second.
pub fn overlapping_sections() -> FormSchema {
    FormSchema::new(
        "Sobreposição",
        numbered_fields(5),
        vec![
            SectionSpec::new("<h1>A</h1>", 0, 3, 0),
            SectionSpec::new("<h1>B</h1>", 2, 4, 1),
        ],
    )
}

/// Six fields partitioned by three sections listed out of index order.
pub fn unordered_sections() -> FormSchema {
    FormSchema::new(
        "Ordem",
        numbered_fields(6),
        vec![
            SectionSpec::new("<h1>Third</h1>", 4, 5, 2),
            SectionSpec::new("<h1>First</h1>", 0, 1, 0),
            SectionSpec::new("<h1>Second</h1>", 2, 3, 1),
        ],
    )
}
