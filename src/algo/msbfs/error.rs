use thiserror::Error;

/// Errors of multi-source visits.
///
/// All variants but [`Interrupted`](MsBfsError::Interrupted) are reported
/// before any label is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsBfsError {
    /// The list of sources is empty.
    #[error("At least one source is needed")]
    NoSources,
    /// There are more sources than bits in a label.
    #[error("{num_sources} sources do not fit in a label of {width} bits")]
    TooManySources { num_sources: usize, width: usize },
    /// A source is not a node of the graph.
    #[error("Source {node} is not a node of the graph ({num_nodes} nodes)")]
    SourceOutOfRange { node: usize, num_nodes: usize },
    /// The interrupt flag was raised; `iteration` is the number of
    /// iterations completed.
    #[error("Visit interrupted after {iteration} iteration(s)")]
    Interrupted { iteration: usize },
}

/// Checks that `sources` can be used as the sources of a visit on a graph
/// with `num_nodes` nodes using labels of `width` bits.
pub(crate) fn check_sources(
    sources: &[usize],
    num_nodes: usize,
    width: usize,
) -> Result<(), MsBfsError> {
    if sources.is_empty() {
        return Err(MsBfsError::NoSources);
    }
    if sources.len() > width {
        return Err(MsBfsError::TooManySources {
            num_sources: sources.len(),
            width,
        });
    }
    if let Some(&node) = sources.iter().find(|&&node| node >= num_nodes) {
        return Err(MsBfsError::SourceOutOfRange { node, num_nodes });
    }
    Ok(())
}
