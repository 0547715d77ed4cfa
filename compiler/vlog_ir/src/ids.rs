//! Typed handles into the session arena.
//!
//! Each pool in [`AstArena`](crate::AstArena) has its own index space, so a
//! handle for one kind of node can never be used to look up another kind.

/// Define a `u32` handle type for one arena pool.
///
/// Each generated type has:
/// - `new()`, `index()` and `raw()` methods
/// - `Copy`, `Eq`, `Ord` and `Hash`
/// - a `Debug` implementation of the form `TypeName(3)`
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw pool index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Index into the owning pool.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Raw `u32` value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )* };
}

define_id!(
    /// Handle to an [`Expr`](crate::Expr).
    ExprId,
    /// Handle to a [`Stmt`](crate::Stmt).
    StmtId,
    /// Handle to an [`Identifier`](crate::Identifier).
    IdentId,
    /// Handle to a [`ModuleDecl`](crate::ModuleDecl).
    ModuleId,
    /// Handle to a [`UdpDecl`](crate::UdpDecl).
    UdpId,
    /// Handle to a [`ConfigDecl`](crate::ConfigDecl).
    ConfigId,
    /// Handle to a [`LibraryDecl`](crate::LibraryDecl).
    LibraryId,
    /// Handle to a raw zero-initialised block.
    BlockId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ExprId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.raw(), 7);
    }

    #[test]
    fn test_id_debug() {
        assert_eq!(format!("{:?}", ModuleId::new(3)), "ModuleId(3)");
    }

    #[test]
    fn test_id_ordering() {
        assert!(StmtId::new(1) < StmtId::new(2));
    }
}
