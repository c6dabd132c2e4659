//! Shared query command handler

use crate::commands::core::{CommandResult, QueryParams};
use crate::engine::WordGraph;
use crate::search::{SearchError, SearchOutcome};

/// Execute a ladder query against a graph
///
/// # Errors
///
/// Returns [`SearchError::UnknownWord`] if either word is not in the
/// dictionary.
pub fn execute_query(graph: &WordGraph, params: &QueryParams) -> Result<SearchOutcome, SearchError> {
    graph.search(&params.start, &params.goal)
}

/// Format a search outcome for display
///
/// A found ladder is one word per line; no path gives `"No path found"`.
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    match outcome.ladder() {
        Some(ladder) => ladder.words().join("\n"),
        None => "No path found".to_string(),
    }
}

/// Execute a query and return the display text and output-file lines
///
/// # Errors
///
/// Returns [`SearchError::UnknownWord`] if either word is not in the
/// dictionary.
pub fn query_and_format(
    graph: &WordGraph,
    params: &QueryParams,
) -> Result<CommandResult, SearchError> {
    let outcome = execute_query(graph, params)?;
    let output = format_outcome(&outcome);
    Ok(match outcome.into_ladder() {
        Some(ladder) => CommandResult::success(output, ladder.into_words()),
        None => CommandResult::empty(output),
    })
}
