//! Grid cells and their printing state.

/// One slot of the display grid.
///
/// The printing state is decided once, when the value is appended, and never
/// changes afterwards. Every non-blank variant keeps the original text so a
/// full dump can show it even when rendering hides it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Never written: padding below a shorter collection, or the row opened
    /// by the last cursor wrap.
    #[default]
    Blank,
    /// Printed as-is.
    Printed(String),
    /// Second element of a shortened collection; rendered as the ellipsis.
    Dotted(String),
    /// Interior element of a shortened collection; not rendered.
    Ignored(String),
}

impl Cell {
    /// The text this cell was created from. Blank cells have none.
    pub fn representation(&self) -> &str {
        match self {
            Cell::Blank => "",
            Cell::Printed(s) | Cell::Dotted(s) | Cell::Ignored(s) => s,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn is_printed(&self) -> bool {
        matches!(self, Cell::Printed(_))
    }

    pub fn is_dotted(&self) -> bool {
        matches!(self, Cell::Dotted(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Cell::Ignored(_))
    }

    /// Classifies element `index` of a collection of `len` elements.
    ///
    /// First and last are printed, the second becomes the ellipsis, and
    /// everything in between is hidden.
    pub(crate) fn for_collection(value: String, index: usize, len: usize) -> Cell {
        if index == 0 || index + 1 == len {
            Cell::Printed(value)
        } else if index == 1 {
            Cell::Dotted(value)
        } else {
            Cell::Ignored(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        assert!(Cell::default().is_blank());
        assert_eq!(Cell::default().representation(), "");
    }

    #[test]
    fn representation_survives_state() {
        assert_eq!(Cell::Printed("a".into()).representation(), "a");
        assert_eq!(Cell::Dotted("b".into()).representation(), "b");
        assert_eq!(Cell::Ignored("c".into()).representation(), "c");
    }

    #[test]
    fn classify_single_element() {
        assert!(Cell::for_collection("x".into(), 0, 1).is_printed());
    }

    #[test]
    fn classify_pair() {
        assert!(Cell::for_collection("x".into(), 0, 2).is_printed());
        assert!(Cell::for_collection("y".into(), 1, 2).is_printed());
    }

    #[test]
    fn classify_long_collection() {
        let states: Vec<Cell> = (0..5)
            .map(|i| Cell::for_collection(i.to_string(), i, 5))
            .collect();
        assert!(states[0].is_printed());
        assert!(states[1].is_dotted());
        assert!(states[2].is_ignored());
        assert!(states[3].is_ignored());
        assert!(states[4].is_printed());
    }

    #[test]
    fn classify_three_has_no_ignored() {
        assert!(Cell::for_collection("b".into(), 1, 3).is_dotted());
        assert!(Cell::for_collection("c".into(), 2, 3).is_printed());
    }
}
