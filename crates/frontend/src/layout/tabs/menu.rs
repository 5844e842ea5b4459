use crate::domain::page::PageIndex;

/// Which tab context menu entries apply to a given tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMenu {
    pub close: bool,
    pub close_others: bool,
    pub close_to_right: bool,
    pub close_to_left: bool,
    pub close_all: bool,
}

impl TabMenu {
    pub fn for_tab(visible: &[PageIndex], index: PageIndex) -> Self {
        let position = visible.iter().position(|&i| i == index);
        Self {
            close: true,
            close_others: visible.len() > 1,
            close_to_right: position.is_some_and(|p| p + 1 < visible.len()),
            close_to_left: position.is_some_and(|p| p > 0),
            close_all: true,
        }
    }
}
