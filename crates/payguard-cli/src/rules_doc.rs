use payguard_core::Schema;
use payguard_reports::StdOutFormatter;

/// Print the rules of one upload format, preceded by the empty-cell policy.
pub fn print_rules_documentation(schema: &Schema, formatter: &StdOutFormatter) {
    println!("{}", rules_documentation(schema, formatter));
}

fn rules_documentation(schema: &Schema, formatter: &StdOutFormatter) -> String {
    format!(
        r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                        PAYGUARD IMPORT RULES                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
 Format: {}
 Columns: {}
{}
{}"#,
        schema.name(),
        schema.headers().join(", "),
        empty_cell_section(),
        formatter.render_rules(schema)
    )
}

fn empty_cell_section() -> &'static str {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 EMPTY CELLS AND EVALUATION ORDER
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
  • Columns are read by position. The header line is never used for mapping.
  • Missing or non-numeric numbers read as 0; a flag is true only for "true".
  • IsRequired reports an empty cell.
  • IsIn, pattern and phone rules treat an empty cell as a value, so it fails.
  • Date checks skip empty cells and leave them to IsRequired.
  • Every rule runs, errors are grouped by category:
      Presence → Domain → Format → Range → Temporal
"#
}
