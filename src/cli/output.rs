//! Output formatting for CLI

use crate::import::ImportResult;
use crate::models::Interface;

/// Format the errors and warnings of an import
pub fn format_import_report(result: &ImportResult) -> String {
    let mut output = String::new();

    if !result.errors.is_empty() {
        output.push_str("\n⚠️  Errors:\n");
        for error in &result.errors {
            output.push_str(&format!("  - {}\n", error));
        }
    }

    if !result.warnings.is_empty() {
        output.push_str("\n⚠️  Warnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output.push_str(&format!(
        "\n✅ Parsed {} interface(s)\n",
        result.interfaces.len()
    ));

    if result.is_clean() {
        output.push_str("\n✅ All checks passed!\n");
    }

    output
}

/// Format one interface as a listing of its contents
pub fn format_interface_listing(interface: &Interface) -> String {
    let mut output = String::new();

    output.push_str(&interface.id);
    if let Some(name) = interface.display_name.as_ref().and_then(|d| d.text()) {
        output.push_str(&format!(" ({})", name));
    }
    output.push('\n');

    let bases = interface.extends_ids();
    if !bases.is_empty() {
        output.push_str(&format!("  extends: {}\n", bases.join(", ")));
    }

    for summary in interface.content_summaries() {
        let name = summary.name.as_deref().unwrap_or("<unnamed>");
        match summary.type_tag {
            Some(tags) => output.push_str(&format!("  - {}: {}\n", name, tags)),
            None => output.push_str(&format!("  - {}\n", name)),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrimitiveSchema, Property, Relationship};

    #[test]
    fn test_listing_shows_contents() {
        let interface = Interface::new("dtmi:com:example:Room;1")
            .with_display_name("Room")
            .with_content(Property::new("floor", PrimitiveSchema::Integer))
            .with_content(Relationship::new("contains", "dtmi:com:example:Sensor;1"));

        let listing = format_interface_listing(&interface);
        assert_eq!(
            listing,
            "dtmi:com:example:Room;1 (Room)\n  - floor: Property\n  - contains: Relationship\n"
        );
    }

    #[test]
    fn test_report_for_clean_import() {
        let report = format_import_report(&ImportResult::default());
        assert!(report.contains("Parsed 0 interface(s)"));
        assert!(report.contains("All checks passed"));
    }
}
