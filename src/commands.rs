//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The engine never scrolls or touches the clipboard itself; it asks the
//! runtime to do so.

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Table state changed and should be repainted
    Redraw,
    /// Bring a row into view
    ScrollToRow(usize),
    /// Place text on the system clipboard
    CopyToClipboard(String),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening nested batches and dropping `None`
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut flat = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            match cmd {
                Cmd::None => {}
                Cmd::Batch(inner) => match Cmd::batch(inner) {
                    Cmd::None => {}
                    Cmd::Batch(inner) => flat.extend(inner),
                    single => flat.push(single),
                },
                other => flat.push(other),
            }
        }

        match flat.len() {
            0 => Cmd::None,
            1 => flat.pop().unwrap_or_default(),
            _ => Cmd::Batch(flat),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScrollToRow(_) => true,
            Cmd::CopyToClipboard(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten into a list of leaf commands in execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }

    /// Rows this command asks to scroll to, in order
    pub fn scroll_targets(&self) -> Vec<usize> {
        match self {
            Cmd::ScrollToRow(row) => vec![*row],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::scroll_targets).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens_and_drops_none() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::ScrollToRow(0), Cmd::None, Cmd::ScrollToRow(4)]),
        ]);
        assert_eq!(
            cmd,
            Cmd::Batch(vec![Cmd::Redraw, Cmd::ScrollToRow(0), Cmd::ScrollToRow(4)])
        );
    }

    #[test]
    fn test_batch_collapses_small_lists() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::None]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::Redraw]), Cmd::Redraw);
    }

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::CopyToClipboard("x".into()).needs_redraw());
        assert!(Cmd::batch(vec![Cmd::CopyToClipboard("x".into()), Cmd::ScrollToRow(1)]).needs_redraw());
    }

    #[test]
    fn test_scroll_targets_in_order() {
        let cmd = Cmd::batch(vec![Cmd::ScrollToRow(0), Cmd::Redraw, Cmd::ScrollToRow(7)]);
        assert_eq!(cmd.scroll_targets(), vec![0, 7]);
        assert_eq!(cmd.into_vec().len(), 3);
    }
}
