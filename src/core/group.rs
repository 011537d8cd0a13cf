//! Player groups, token identifiers and per-group storage.
//!
//! ## Group
//!
//! The four colors seated around the board. A group owns four tokens, a
//! spawn area, an entry point onto the shared track and a private home
//! stretch. Group order is also turn order.
//!
//! ## TokenId
//!
//! Stable identifier in `0..16`; `id / 4` is the owning group.
//!
//! ## GroupMap
//!
//! Fixed-size per-group storage indexed by `Group`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{LudoError, Result};

/// Number of groups (players) in a match.
pub const GROUP_COUNT: usize = 4;

/// Tokens owned by each group.
pub const TOKENS_PER_GROUP: usize = 4;

/// Total number of tokens on the board.
pub const TOKEN_COUNT: usize = GROUP_COUNT * TOKENS_PER_GROUP;

/// One of the four player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    Green = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
}

impl Group {
    /// All groups in turn order.
    pub const ALL: [Group; GROUP_COUNT] = [Group::Green, Group::Red, Group::Blue, Group::Yellow];

    /// Look a group up by index.
    ///
    /// ```
    /// use parques::core::Group;
    ///
    /// assert_eq!(Group::from_index(2).unwrap(), Group::Blue);
    /// assert!(Group::from_index(4).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(LudoError::InvalidGroup { index })
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The group seated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % GROUP_COUNT]
    }

    /// The four tokens owned by this group.
    pub fn tokens(self) -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_GROUP).map(move |slot| TokenId::of(self, slot))
    }

    /// Display color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Group::Green => "green",
            Group::Red => "red",
            Group::Blue => "blue",
            Group::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Token identifier in `0..16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(u8);

impl TokenId {
    /// Validate a raw token id.
    pub fn new(id: u8) -> Result<Self> {
        if (id as usize) < TOKEN_COUNT {
            Ok(Self(id))
        } else {
            Err(LudoError::InvalidPieceId { id })
        }
    }

    /// Token in `slot` (`0..4`) of `group`.
    #[must_use]
    pub const fn of(group: Group, slot: usize) -> Self {
        debug_assert!(slot < TOKENS_PER_GROUP, "token slot out of range");
        Self((group as usize * TOKENS_PER_GROUP + slot) as u8)
    }

    /// Raw id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index usable for per-token arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Owning group.
    #[must_use]
    pub const fn group(self) -> Group {
        Group::ALL[self.0 as usize / TOKENS_PER_GROUP]
    }

    /// Position of the token inside its group (`0..4`).
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize % TOKENS_PER_GROUP
    }

    /// Every token on the board.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (0..TOKEN_COUNT as u8).map(TokenId)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token {}", self.0)
    }
}

/// Per-group storage with O(1) access.
///
/// ```
/// use parques::core::{Group, GroupMap};
///
/// let mut names: GroupMap<&str> = GroupMap::new(|g| g.name());
/// assert_eq!(names[Group::Red], "red");
///
/// names[Group::Red] = "Bruno";
/// assert_eq!(names[Group::Red], "Bruno");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupMap<T> {
    data: [T; GROUP_COUNT],
}

impl<T> GroupMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Group) -> T) -> Self {
        Self {
            data: Group::ALL.map(factory),
        }
    }

    /// Create a map from values in group order.
    pub fn from_array(data: [T; GROUP_COUNT]) -> Self {
        Self { data }
    }

    /// Create a map with every entry set to `value`.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, group: Group) -> &T {
        &self.data[group.index()]
    }

    pub fn get_mut(&mut self, group: Group) -> &mut T {
        &mut self.data[group.index()]
    }

    /// Iterate over `(Group, &T)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &T)> {
        Group::ALL.into_iter().zip(self.data.iter())
    }

    /// Values in group order.
    #[must_use]
    pub fn as_array(&self) -> &[T; GROUP_COUNT] {
        &self.data
    }

    /// Consume into values in group order.
    pub fn into_array(self) -> [T; GROUP_COUNT] {
        self.data
    }
}

impl<T: Default> Default for GroupMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Group> for GroupMap<T> {
    type Output = T;

    fn index(&self, group: Group) -> &Self::Output {
        self.get(group)
    }
}

impl<T> IndexMut<Group> for GroupMap<T> {
    fn index_mut(&mut self, group: Group) -> &mut Self::Output {
        self.get_mut(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_from_index() {
        assert_eq!(Group::from_index(0), Ok(Group::Green));
        assert_eq!(Group::from_index(3), Ok(Group::Yellow));
        assert_eq!(Group::from_index(4), Err(LudoError::InvalidGroup { index: 4 }));
    }

    #[test]
    fn test_group_next_wraps() {
        assert_eq!(Group::Green.next(), Group::Red);
        assert_eq!(Group::Yellow.next(), Group::Green);
    }

    #[test]
    fn test_group_tokens() {
        let ids: Vec<u8> = Group::Blue.tokens().map(TokenId::raw).collect();
        assert_eq!(ids, vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_token_id_bounds() {
        assert!(TokenId::new(0).is_ok());
        assert!(TokenId::new(15).is_ok());
        assert_eq!(TokenId::new(16), Err(LudoError::InvalidPieceId { id: 16 }));
    }

    #[test]
    fn test_token_group_and_slot() {
        let token = TokenId::new(7).unwrap();
        assert_eq!(token.group(), Group::Red);
        assert_eq!(token.slot(), 3);
        assert_eq!(TokenId::new(12).unwrap().group(), Group::Yellow);
        assert_eq!(TokenId::of(Group::Blue, 3), TokenId::new(11).unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "token slot out of range")]
    fn test_token_of_rejects_bad_slot() {
        let _ = TokenId::of(Group::Green, 4);
    }

    #[test]
    fn test_group_map_iter_order() {
        let map = GroupMap::new(|g| g.index() * 10);
        let collected: Vec<_> = map.iter().map(|(g, v)| (g, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (Group::Green, 0),
                (Group::Red, 10),
                (Group::Blue, 20),
                (Group::Yellow, 30)
            ]
        );
    }

    #[test]
    fn test_group_map_serde() {
        let map = GroupMap::from_array([1u8, 2, 3, 4]);
        let json = serde_json::to_string(&map).unwrap();
        let back: GroupMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
