//! Session arena.
//!
//! Every node built during a parse session lives in one [`AstArena`]:
//! typed pools for the recursive and top-level node kinds, raw zeroed blocks,
//! and the string interner. Each allocation is recorded once, so the arena
//! can report totals and release everything in one step.
//!
//! Nodes are never freed individually. [`AstArena::release_all`] drops every
//! pool at once and returns the final [`AllocStats`].

use std::fmt;
use std::mem::size_of;

use crate::ast::{ConfigDecl, Expr, Identifier, LibraryDecl, ModuleDecl, Stmt, UdpDecl};
use crate::{
    BlockId, ConfigId, ExprId, IdentId, LibraryId, ModuleId, Name, StmtId, StringInterner, UdpId,
};

/// Which pool an allocation record belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Slot {
    Block(BlockId),
    Name(Name),
    Ident(IdentId),
    Expr(ExprId),
    Stmt(StmtId),
    Module(ModuleId),
    Udp(UdpId),
    Config(ConfigId),
    Library(LibraryId),
}

/// One tracked allocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AllocRecord {
    /// Bytes charged to this allocation.
    pub size: usize,
    pub slot: Slot,
}

/// Allocation counters for one session.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AllocStats {
    pub allocations: usize,
    pub bytes_allocated: usize,
    pub bytes_freed: usize,
}

impl AllocStats {
    /// Bytes allocated and not yet released.
    pub fn bytes_remaining(&self) -> usize {
        self.bytes_allocated.saturating_sub(self.bytes_freed)
    }
}

/// Owner of every node in a parse session.
///
/// # Index Spaces
///
/// Each pool has its own handle type ([`ExprId`], [`StmtId`], ...), and a
/// handle is only meaningful for the arena that returned it. Looking up a
/// handle after [`release_all`](AstArena::release_all) panics.
pub struct AstArena {
    interner: StringInterner,
    blocks: Vec<Box<[u8]>>,
    idents: Vec<Identifier>,
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    modules: Vec<ModuleDecl>,
    udps: Vec<UdpDecl>,
    configs: Vec<ConfigDecl>,
    libraries: Vec<LibraryDecl>,
    /// One record per live allocation, in allocation order.
    records: Vec<AllocRecord>,
    stats: AllocStats,
}

/// Convert a pool length to a `u32` handle index.
///
/// # Panics
/// Panics if the pool has grown past `u32::MAX` entries.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} pool overflow: {len} entries"))
}

macro_rules! pool_accessors {
    ($(
        $field:ident: $ty:ty => $id:ident, $slot:ident,
        $alloc:ident, $get:ident, $get_mut:ident, $count:ident;
    )*) => { $(
        #[doc = concat!("Allocate a [`", stringify!($ty), "`] and return its handle.")]
        pub fn $alloc(&mut self, node: $ty) -> $id {
            let id = $id::new(to_u32(self.$field.len(), stringify!($field)));
            self.$field.push(node);
            self.track(size_of::<$ty>(), Slot::$slot(id));
            id
        }

        #[doc = concat!("Get a [`", stringify!($ty), "`] by handle.")]
        ///
        /// # Panics
        /// Panics if the handle is out of bounds.
        #[inline]
        #[track_caller]
        pub fn $get(&self, id: $id) -> &$ty {
            &self.$field[id.index()]
        }

        #[doc = concat!("Get a mutable [`", stringify!($ty), "`] by handle.")]
        ///
        /// # Panics
        /// Panics if the handle is out of bounds.
        #[inline]
        #[track_caller]
        pub fn $get_mut(&mut self, id: $id) -> &mut $ty {
            &mut self.$field[id.index()]
        }

        #[inline]
        pub fn $count(&self) -> usize {
            self.$field.len()
        }
    )* };
}

impl AstArena {
    pub fn new() -> Self {
        AstArena {
            interner: StringInterner::new(),
            blocks: Vec::new(),
            idents: Vec::new(),
            exprs: Vec::new(),
            stmts: Vec::new(),
            modules: Vec::new(),
            udps: Vec::new(),
            configs: Vec::new(),
            libraries: Vec::new(),
            records: Vec::new(),
            stats: AllocStats::default(),
        }
    }

    /// Create an arena pre-sized for `source_len` bytes of source.
    ///
    /// Heuristic: about one expression per 20 bytes and one identifier per
    /// 30 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 20;
        let mut arena = Self::new();
        arena.exprs.reserve(estimated_exprs);
        arena.idents.reserve(source_len / 30);
        arena.stmts.reserve(estimated_exprs / 4);
        arena.records.reserve(estimated_exprs * 2);
        arena
    }

    fn track(&mut self, size: usize, slot: Slot) {
        self.records.push(AllocRecord { size, slot });
        self.stats.allocations += 1;
        self.stats.bytes_allocated += size;
    }

    // ===== Raw blocks =====

    /// Allocate `count * elem_size` zero-initialised bytes.
    ///
    /// # Panics
    /// Panics if `count * elem_size` overflows. Allocation failure aborts.
    pub fn alloc_zeroed(&mut self, count: usize, elem_size: usize) -> BlockId {
        let Some(size) = count.checked_mul(elem_size) else {
            panic!("arena block size overflow: {count} * {elem_size}");
        };
        let id = BlockId::new(to_u32(self.blocks.len(), "blocks"));
        self.blocks.push(vec![0u8; size].into_boxed_slice());
        self.track(size, Slot::Block(id));
        id
    }

    /// # Panics
    /// Panics if the handle is out of bounds.
    #[track_caller]
    pub fn block(&self, id: BlockId) -> &[u8] {
        &self.blocks[id.index()]
    }

    /// # Panics
    /// Panics if the handle is out of bounds.
    #[track_caller]
    pub fn block_mut(&mut self, id: BlockId) -> &mut [u8] {
        &mut self.blocks[id.index()]
    }

    // ===== Strings =====

    /// Intern `text`. Only the first occurrence of a string is charged.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(name) = self.interner.get(text) {
            return name;
        }
        let name = self.interner.intern(text);
        self.track(text.len(), Slot::Name(name));
        name
    }

    /// Text of an interned name.
    pub fn name_str(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    // ===== Node pools =====

    pool_accessors! {
        idents: Identifier => IdentId, Ident, alloc_ident, get_ident, get_ident_mut, ident_count;
        exprs: Expr => ExprId, Expr, alloc_expr, get_expr, get_expr_mut, expr_count;
        stmts: Stmt => StmtId, Stmt, alloc_stmt, get_stmt, get_stmt_mut, stmt_count;
        modules: ModuleDecl => ModuleId, Module, alloc_module, get_module, get_module_mut, module_count;
        udps: UdpDecl => UdpId, Udp, alloc_udp, get_udp, get_udp_mut, udp_count;
        configs: ConfigDecl => ConfigId, Config, alloc_config, get_config, get_config_mut, config_count;
        libraries: LibraryDecl => LibraryId, Library, alloc_library, get_library, get_library_mut, library_count;
    }

    // ===== Accounting =====

    pub fn stats(&self) -> AllocStats {
        self.stats
    }

    /// Live allocation records, oldest first.
    pub fn records(&self) -> &[AllocRecord] {
        &self.records
    }

    /// Release every allocation and return the session's final counters.
    ///
    /// Walks the record list charging each record to `bytes_freed`, drops
    /// every pool, logs the summary, and resets the counters. Calling it again
    /// finds no records and returns zeroed stats.
    pub fn release_all(&mut self) -> AllocStats {
        let mut stats = self.stats;
        for record in self.records.drain(..) {
            stats.bytes_freed += record.size;
        }

        self.blocks = Vec::new();
        self.idents = Vec::new();
        self.exprs = Vec::new();
        self.stmts = Vec::new();
        self.modules = Vec::new();
        self.udps = Vec::new();
        self.configs = Vec::new();
        self.libraries = Vec::new();
        self.interner.clear();

        tracing::debug!(
            allocations = stats.allocations,
            bytes_allocated = stats.bytes_allocated,
            bytes_freed = stats.bytes_freed,
            bytes_remaining = stats.bytes_remaining(),
            "arena released"
        );

        self.stats = AllocStats::default();
        stats
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AstArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AstArena {{ {} idents, {} exprs, {} stmts, {} modules, {} udps, {} blocks, {} bytes }}",
            self.idents.len(),
            self.exprs.len(),
            self.stmts.len(),
            self.modules.len(),
            self.udps.len(),
            self.blocks.len(),
            self.stats.bytes_allocated
        )
    }
}
