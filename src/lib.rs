//! This crate exposes a pair of ordered collections mostly for
//! educational purposes: a Binary Search Tree (BST) with parent links
//! and per-node depth bookkeeping, and an array-backed binary min-heap.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree supports inserting, finding, and deleting
//! stored keys. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have
//!    a key less than its own key.
//! 2. For every node in a BST, all the nodes in its right subtree have
//!    a key greater than its own key.
//!
//! The tree in [`leveled`] additionally gives every node a *level*,
//! its depth measured from the root (the root sits at level 1), and
//! keeps a cached *height*, the maximum level present (0 when empty).
//! Deletion has to maintain those numbers: a subtree spliced into its
//! grandparent's slot moves one level up, so the whole subtree is
//! renumbered and the height recounted.
//!
//! > Note that this tree never rebalances. Feeding it sorted keys
//! > degenerates it into a linked list, and operations take `O(height)`
//! > rather than `O(lg N)`.
//!
//! ## Binary Min-Heap
//!
//! The heap in [`heap`] keeps its keys in a dense array whose slots
//! are numbered from 1, so the parent of slot `i` is slot `i / 2`.
//! Insertion and extraction restore heap order by sifting a key up or
//! down until every slot's key is no smaller than its parent's.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod heap;
pub mod leveled;

#[cfg(test)]
mod test;
