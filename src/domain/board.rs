use crate::domain::item::{Id, Item};
use crate::domain::session::DragSession;
use crate::error::{BoardError, Result};
use crate::sensors::SensorConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a single container and its seed items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub id: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ContainerConfig {
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub containers: Vec<ContainerConfig>,
    #[serde(default)]
    pub sensors: SensorConfig,
}

impl Default for BoardConfig {
    /// Four containers of three slots each, alternating placeholders and items
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            containers: vec![
                ContainerConfig::new(
                    "container1",
                    vec![Item::placeholder(1), Item::new(2), Item::placeholder(3)],
                ),
                ContainerConfig::new(
                    "container2",
                    vec![Item::new(4), Item::placeholder(5), Item::placeholder(6)],
                ),
                ContainerConfig::new(
                    "container3",
                    vec![Item::placeholder(7), Item::new(8), Item::placeholder(9)],
                ),
                ContainerConfig::new(
                    "container4",
                    vec![Item::new(10), Item::placeholder(11), Item::placeholder(12)],
                ),
            ],
            sensors: SensorConfig::default(),
        }
    }
}

/// An ordered list of items that doubles as a drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: Id,
    pub items: Vec<Item>,
}

impl Container {
    pub fn position(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Board state: a fixed, ordered set of containers plus the current drag session
///
/// Container ids never change after construction. Only membership and order
/// of items move, through the drag lifecycle handlers.
#[derive(Debug)]
pub struct Board {
    name: String,
    sensors: SensorConfig,
    containers: Vec<Container>,
    pub(crate) session: Option<DragSession>,
    /// Set when items changed during this turn; consumed by the next animation frame.
    pub(crate) frame_clear_pending: bool,
}

impl Board {
    /// Builds a board from its configuration, rejecting duplicate ids
    pub fn new(config: BoardConfig) -> Result<Self> {
        if config.containers.is_empty() {
            return Err(BoardError::NoContainers);
        }
        config.sensors.validate()?;

        let mut seen: HashSet<Id> = HashSet::new();
        for container in &config.containers {
            let id = Id::Str(container.id.clone());
            if !seen.insert(id) {
                return Err(BoardError::DuplicateId(container.id.clone()));
            }
        }
        for item in config.containers.iter().flat_map(|c| c.items.iter()) {
            if !seen.insert(item.id.clone()) {
                return Err(BoardError::DuplicateId(item.id.to_string()));
            }
        }

        let containers = config
            .containers
            .into_iter()
            .map(|c| Container {
                id: Id::Str(c.id),
                items: c.items,
            })
            .collect();

        Ok(Self {
            name: config.name,
            sensors: config.sensors,
            containers,
            session: None,
            frame_clear_pending: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sensors(&self) -> &SensorConfig {
        &self.sensors
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Items of the named container, in order
    pub fn items(&self, container_id: &Id) -> Option<&[Item]> {
        self.container_index(container_id)
            .map(|idx| self.containers[idx].items.as_slice())
    }

    pub fn is_container(&self, id: &Id) -> bool {
        self.containers.iter().any(|c| &c.id == id)
    }

    /// Resolves a container id or an item id to the container that currently owns it
    pub fn find_container(&self, id: &Id) -> Option<&Id> {
        self.resolve_container(id).map(|idx| &self.containers[idx].id)
    }

    /// Looks up an item anywhere on the board
    pub fn item(&self, id: &Id) -> Option<&Item> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| &item.id == id)
    }

    /// Id of the item currently being dragged, if any
    pub fn active_id(&self) -> Option<&Id> {
        self.session.as_ref().map(|s| &s.active_id)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// All item ids in board order, container by container
    pub fn item_ids(&self) -> Vec<&Id> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter().map(|item| &item.id))
            .collect()
    }

    pub(crate) fn container_index(&self, id: &Id) -> Option<usize> {
        self.containers.iter().position(|c| &c.id == id)
    }

    pub(crate) fn resolve_container(&self, id: &Id) -> Option<usize> {
        self.container_index(id)
            .or_else(|| self.containers.iter().position(|c| c.contains(id)))
    }

    pub(crate) fn container_at(&self, idx: usize) -> &Container {
        &self.containers[idx]
    }

    /// Removes `id` from container `from` and inserts it into container `to` at `index`
    ///
    /// `index` is clamped to the target length, so past-the-end appends.
    pub(crate) fn transfer(&mut self, id: &Id, from: usize, to: usize, index: usize) -> bool {
        let Some(pos) = self.containers[from].position(id) else {
            return false;
        };
        let item = self.containers[from].items.remove(pos);
        let target = &mut self.containers[to].items;
        let index = index.min(target.len());
        target.insert(index, item);
        true
    }

    /// Stable move within one container: remove at `from`, insert at `to`
    pub(crate) fn reorder(&mut self, container: usize, from: usize, to: usize) {
        array_move(&mut self.containers[container].items, from, to);
    }

    pub(crate) fn snapshot(&self) -> Vec<Container> {
        self.containers.clone()
    }

    pub(crate) fn restore(&mut self, snapshot: Vec<Container>) {
        self.containers = snapshot;
    }
}

/// Moves the element at `from` to `to`, keeping the relative order of all others
pub fn array_move<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if from >= list.len() || from == to {
        return;
    }
    let value = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_board() -> Board {
        Board::new(BoardConfig::default()).unwrap()
    }

    #[test]
    fn test_board_creation() {
        let board = reference_board();
        assert_eq!(board.containers().len(), 4);
        assert_eq!(board.item_ids().len(), 12);
        assert!(board.active_id().is_none());
    }

    #[test]
    fn test_find_container() {
        let board = reference_board();

        let c1 = Id::from("container1");
        assert_eq!(board.find_container(&c1), Some(&c1));
        assert_eq!(
            board.find_container(&Id::from(8)),
            Some(&Id::from("container3"))
        );
        assert_eq!(board.find_container(&Id::from(99)), None);
        assert_eq!(board.find_container(&Id::from("container9")), None);
    }

    #[test]
    fn test_duplicate_item_ids_rejected() {
        let config = BoardConfig {
            name: "dupes".to_string(),
            containers: vec![
                ContainerConfig::new("a", vec![Item::new(1)]),
                ContainerConfig::new("b", vec![Item::new(1)]),
            ],
            sensors: SensorConfig::default(),
        };

        assert!(matches!(
            Board::new(config),
            Err(BoardError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_item_id_colliding_with_container_rejected() {
        let config = BoardConfig {
            name: "collide".to_string(),
            containers: vec![
                ContainerConfig::new("a", vec![Item::new("b")]),
                ContainerConfig::new("b", vec![]),
            ],
            sensors: SensorConfig::default(),
        };

        assert!(matches!(Board::new(config), Err(BoardError::DuplicateId(_))));
    }

    #[test]
    fn test_empty_board_rejected() {
        let config = BoardConfig {
            name: "empty".to_string(),
            containers: vec![],
            sensors: SensorConfig::default(),
        };

        assert!(matches!(Board::new(config), Err(BoardError::NoContainers)));
    }

    #[test]
    fn test_array_move() {
        let mut list = vec!['D', 'E', 'F'];
        array_move(&mut list, 2, 0);
        assert_eq!(list, vec!['F', 'D', 'E']);

        array_move(&mut list, 0, 2);
        assert_eq!(list, vec!['D', 'E', 'F']);

        array_move(&mut list, 5, 0);
        assert_eq!(list, vec!['D', 'E', 'F']);
    }

    #[test]
    fn test_transfer_clamps_index() {
        let mut board = reference_board();
        let from = board.container_index(&Id::from("container1")).unwrap();
        let to = board.container_index(&Id::from("container2")).unwrap();

        assert!(board.transfer(&Id::from(2), from, to, 10));
        let ids: Vec<_> = board.containers()[to].items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.last(), Some(&Id::from(2)));
        assert_eq!(board.containers()[from].items.len(), 2);
    }
}
