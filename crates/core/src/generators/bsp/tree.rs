//! Arena-backed binary partition tree.

use log::trace;
use slotmap::{SlotMap, new_key_type};

use crate::random::SeededRandom;
use crate::rect::Rect;

new_key_type! {
    pub struct NodeKey;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BspNode {
    pub area: Rect,
    /// Either both children exist or neither does.
    pub children: Option<(NodeKey, NodeKey)>,
    /// Set on leaves once rooms are carved.
    pub room: Option<Rect>,
}

impl BspNode {
    fn leaf(area: Rect) -> Self {
        Self { area, children: None, room: None }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct BspTree {
    nodes: SlotMap<NodeKey, BspNode>,
    root: NodeKey,
}

impl BspTree {
    pub fn new(area: Rect) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(BspNode::leaf(area));
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&BspNode> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &BspNode)> {
        self.nodes.iter()
    }

    pub(super) fn set_room(&mut self, key: NodeKey, room: Rect) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.room = Some(room);
        }
    }

    /// Leaves in depth-first, left-before-right order.
    pub fn leaves(&self) -> Vec<NodeKey> {
        let mut leaves = Vec::new();
        let mut pending = vec![self.root];
        while let Some(key) = pending.pop() {
            match self.nodes[key].children {
                Some((left, right)) => {
                    pending.push(right);
                    pending.push(left);
                }
                None => leaves.push(key),
            }
        }
        leaves
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self.root, 0_usize)];
        while let Some((key, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            if let Some((left, right)) = self.nodes[key].children {
                pending.push((left, depth + 1));
                pending.push((right, depth + 1));
            }
        }
        deepest
    }

    /// Splits `start` while both sides exceed `min_size`, descending into one randomly
    /// chosen child each time. Returns the leaf where the descent stopped.
    ///
    /// `min_size` must be at least 1 so neither child can come out empty.
    pub(super) fn split(
        &mut self,
        start: NodeKey,
        min_size: i32,
        random: &mut SeededRandom,
    ) -> NodeKey {
        let mut current = start;
        loop {
            let area = self.nodes[current].area;
            if area.width <= min_size || area.height <= min_size {
                return current;
            }

            let (left, right) = if random.chance(0.5) {
                let cut = random.range(area.y + min_size, area.y_max() - min_size);
                (
                    Rect::new(area.x, area.y, area.width, cut - area.y),
                    Rect::new(area.x, cut, area.width, area.y_max() - cut),
                )
            } else {
                let cut = random.range(area.x + min_size, area.x_max() - min_size);
                (
                    Rect::new(area.x, area.y, cut - area.x, area.height),
                    Rect::new(cut, area.y, area.x_max() - cut, area.height),
                )
            };
            trace!("bsp split {area:?} into {left:?} and {right:?}");

            let left_key = self.nodes.insert(BspNode::leaf(left));
            let right_key = self.nodes.insert(BspNode::leaf(right));
            self.nodes[current].children = Some((left_key, right_key));
            current = if random.chance(0.5) { left_key } else { right_key };
        }
    }
}
