pub mod board;
pub mod item;
pub mod session;

pub use board::{array_move, Board, BoardConfig, Container, ContainerConfig};
pub use item::{Id, Item, ItemData};
pub use session::DragSession;
