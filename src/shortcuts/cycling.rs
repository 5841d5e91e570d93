//! Choosing between several tools bound to the same chord.

use crate::input::ToolId;

/// Picks the tool to activate when `candidates` all share the pressed chord.
///
/// The first visible candidate other than `current` wins. When there is none
/// (every other candidate hidden), the candidate after `current` is chosen,
/// wrapping to the first, so repeated presses keep cycling. If `current` is
/// not a candidate at all, the first candidate is kept.
///
/// Returns `None` only for an empty candidate list.
pub fn resolve_tool_cycle<'a, F>(
    current: Option<&ToolId>,
    candidates: &'a [ToolId],
    is_visible: F,
) -> Option<&'a ToolId>
where
    F: Fn(&ToolId) -> bool,
{
    let first = candidates.first()?;

    if let Some(tool) = candidates
        .iter()
        .find(|tool| Some(*tool) != current && is_visible(*tool))
    {
        return Some(tool);
    }

    let next = current
        .and_then(|current| candidates.iter().position(|tool| tool == current))
        .map(|index| &candidates[(index + 1) % candidates.len()]);

    Some(next.unwrap_or(first))
}
