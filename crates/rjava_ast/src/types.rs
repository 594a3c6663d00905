//! Flag types for syntax tree nodes.

bitflags::bitflags! {
    /// Boolean attributes of a node that do not warrant a separate variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE          = 0;
        /// A class-or-interface declaration declared with `interface`.
        const INTERFACE     = 1 << 0;
        /// An import ending in `.*`.
        const ON_DEMAND     = 1 << 1;
        /// A wildcard bounded with `super` rather than `extends`.
        const LOWER_BOUND   = 1 << 2;
        /// Node was created by a factory rather than parsed from source.
        const SYNTHESIZED   = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_disjoint() {
        let flags = NodeFlags::INTERFACE | NodeFlags::SYNTHESIZED;
        assert!(flags.contains(NodeFlags::INTERFACE));
        assert!(!flags.contains(NodeFlags::ON_DEMAND));
        assert!(!flags.contains(NodeFlags::LOWER_BOUND));
        assert!(NodeFlags::NONE.is_empty());
    }
}
