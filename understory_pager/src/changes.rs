// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change flags returned by mutating pager calls.

bitflags::bitflags! {
    /// Which parts of the pager state an operation changed.
    ///
    /// Hosts can use this to skip relayout (no `CURRENT`) or repaint
    /// (empty set) after feeding an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PagerChanges: u8 {
        /// The visual offset changed.
        const OFFSET    = 0b0000_0001;
        /// The committed page coordinate changed.
        const CURRENT   = 0b0000_0010;
        /// The drag direction was locked or released.
        const DIRECTION = 0b0000_0100;
        /// The container size changed.
        const SIZE      = 0b0000_1000;
    }
}
