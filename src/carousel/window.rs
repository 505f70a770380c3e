//! Ring of live slides around the active position

use std::collections::VecDeque;

use super::layout::SlotTransform;

/// Stable identity of a slide for the lifetime of its proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

/// One rendered slide
#[derive(Debug)]
pub struct Slot<H> {
    pub id: SlotId,
    /// Offset from the active slide; rewritten in place as the window slides
    pub relative: i32,
    /// Catalog index this slide shows
    pub actual: usize,
    /// Last transform pushed to the proxy
    pub current: SlotTransform,
    /// Exclusively owned visual proxy
    pub handle: H,
}

/// Slides ordered by relative index, front = `-B`, back = `+B`
#[derive(Debug)]
pub struct SlideWindow<H> {
    half_width: i32,
    slots: VecDeque<Slot<H>>,
}

impl<H> SlideWindow<H> {
    pub fn new(half_width: usize) -> Self {
        Self {
            half_width: half_width as i32,
            slots: VecDeque::with_capacity(half_width * 2 + 1),
        }
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True once every relative index in `[-B, B]` has exactly one slot
    pub fn is_full(&self) -> bool {
        self.slots.len() == (self.half_width * 2 + 1) as usize
            && self
                .slots
                .iter()
                .zip(-self.half_width..=self.half_width)
                .all(|(slot, rel)| slot.relative == rel)
    }

    /// Append during initial population (relative indices ascending)
    pub fn push_back(&mut self, slot: Slot<H>) {
        debug_assert!(self.slots.back().is_none_or(|s| s.relative < slot.relative));
        self.slots.push_back(slot);
    }

    /// Evict `-B`, shift everything one step toward the front, insert `slot` at `+B`
    pub fn slide_forward(&mut self, slot: Slot<H>) -> Option<Slot<H>> {
        let evicted = self.slots.pop_front();
        for s in &mut self.slots {
            s.relative -= 1;
        }
        debug_assert_eq!(slot.relative, self.half_width);
        self.slots.push_back(slot);
        evicted
    }

    /// Evict `+B`, shift everything one step toward the back, insert `slot` at `-B`
    pub fn slide_backward(&mut self, slot: Slot<H>) -> Option<Slot<H>> {
        let evicted = self.slots.pop_back();
        for s in &mut self.slots {
            s.relative += 1;
        }
        debug_assert_eq!(slot.relative, -self.half_width);
        self.slots.push_front(slot);
        evicted
    }

    /// Remove every slot (full rebuild)
    pub fn drain(&mut self) -> impl Iterator<Item = Slot<H>> + '_ {
        self.slots.drain(..)
    }

    pub fn get(&self, relative: i32) -> Option<&Slot<H>> {
        let pos = relative + self.half_width;
        if pos < 0 {
            return None;
        }
        self.slots.get(pos as usize).filter(|s| s.relative == relative)
    }

    /// The slide at relative index 0
    pub fn active(&self) -> Option<&Slot<H>> {
        self.get(0)
    }

    pub fn find_mut(&mut self, id: SlotId) -> Option<&mut Slot<H>> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<H>> {
        self.slots.iter()
    }
}
