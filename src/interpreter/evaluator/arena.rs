use crate::interpreter::value::core::Tensor;

/// Index of a value stored in a [`TransientArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Append-only storage for the values one statement creates.
///
/// Literals and intermediate results that have no named owner live here for
/// the rest of the statement, so they can be updated in place through views.
/// Slots are addressed by [`SlotId`] rather than by reference; every id is
/// invalidated by [`TransientArena::clear`], which the session calls between
/// statements.
#[derive(Debug, Default)]
pub struct TransientArena {
    slots: Vec<Tensor>,
}

impl TransientArena {
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Stores `value` and returns its slot.
    pub fn alloc(&mut self, value: Tensor) -> SlotId {
        self.slots.push(value);
        SlotId(self.slots.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&Tensor> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Tensor> {
        self.slots.get_mut(id.0)
    }

    /// Moves the value out of its slot, leaving a zero scalar behind.
    ///
    /// The slot itself stays allocated until the arena is cleared, so ids
    /// handed out earlier keep pointing at the same positions.
    pub fn take(&mut self, id: SlotId) -> Option<Tensor> {
        self.slots.get_mut(id.0).map(std::mem::take)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every stored value.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
