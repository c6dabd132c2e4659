//! Component census formatting

use crate::graph::ComponentCensus;

/// Format a census as a summary line plus one row per component size.
///
/// ```text
/// Found a total of 3 groups
///       2 groups with       1 word(s)
///       1 groups with       4 word(s)
/// ```
pub fn format_census(census: &ComponentCensus) -> String {
    let mut out = format!("Found a total of {} groups", census.len());
    for (size, count) in census.histogram() {
        out.push_str(&format!("\n{:7} groups with {:7} word(s)", count, size));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyBuilder;
    use crate::signature::SignatureIndex;

    #[test]
    fn test_format_census() {
        let index = SignatureIndex::from_words(["lead", "deal", "lad", "load", "zebra", "yak"]);
        let graph = AdjacencyBuilder::new(&index).build();
        let census = ComponentCensus::compute(&index, &graph);

        let text = format_census(&census);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Found a total of 3 groups");
        assert_eq!(lines[1], "      2 groups with       1 word(s)");
        assert_eq!(lines[2], "      1 groups with       4 word(s)");
    }

    #[test]
    fn test_format_empty_census() {
        assert_eq!(
            format_census(&ComponentCensus::default()),
            "Found a total of 0 groups"
        );
    }
}
