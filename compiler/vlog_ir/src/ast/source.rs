//! Top-level source items.

use crate::{ModuleId, Name, UdpId};

/// One freshly parsed top-level construct, tagged by kind for ingestion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SourceItem {
    Module(ModuleId),
    Udp(UdpId),
    /// A construct the tree does not store (e.g. a stray directive or a
    /// newer language feature). Ingestion logs and drops it.
    Unsupported { line: u32, description: Name },
}
