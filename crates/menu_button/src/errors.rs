use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuButtonError {
    #[error("There is no menu item at index {index} (the menu has {len}).")]
    ItemOutOfRange { index: usize, len: usize },
}
