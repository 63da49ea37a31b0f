//! Current selection on the host topology canvas.

/// Node selection, replaced wholesale whenever the host's selection-change
/// hook fires. Every dispatch operation reads it; nothing in this crate
/// mutates it except [`crate::VnOverlay::selection_changed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Empty,
    /// One entity selected
    Single(String),
    /// Several entities selected, in selection order
    Multi(Vec<String>),
}

impl Selection {
    /// Build a selection from an ordered id list.
    pub fn from_ids(mut ids: Vec<String>) -> Self {
        match ids.len() {
            0 => Self::Empty,
            1 => Self::Single(ids.remove(0)),
            _ => Self::Multi(ids),
        }
    }

    /// The selected ids in selection order. Empty slice for [`Self::Empty`].
    pub fn ids(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Single(id) => std::slice::from_ref(id),
            Self::Multi(ids) => ids,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ids_classifies_by_count() {
        assert_eq!(Selection::from_ids(vec![]), Selection::Empty);
        assert_eq!(
            Selection::from_ids(vec!["a".to_string()]),
            Selection::Single("a".to_string())
        );
        assert_eq!(
            Selection::from_ids(vec!["a".to_string(), "b".to_string()]),
            Selection::Multi(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn ids_preserves_selection_order() {
        let sel = Selection::from_ids(vec!["z".to_string(), "a".to_string(), "m".to_string()]);
        assert_eq!(sel.ids(), ["z", "a", "m"]);
    }
}
