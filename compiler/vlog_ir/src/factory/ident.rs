//! Identifier constructors.

use crate::ast::{IdentKind, IdentQualifier, IdentRole, Identifier};
use crate::{AstArena, ExprId, IdentId};

impl AstArena {
    /// Simple identifier.
    pub fn new_identifier(&mut self, text: &str, line: u32) -> IdentId {
        let name = self.intern(text);
        self.alloc_ident(Identifier::new(name, IdentKind::Simple, line))
    }

    /// System identifier such as `$display`. The `$` is kept as written.
    pub fn new_system_identifier(&mut self, text: &str, line: u32) -> IdentId {
        let name = self.intern(text);
        self.alloc_ident(Identifier::new(name, IdentKind::System, line))
    }

    /// Append `segment` to the end of the hierarchical name headed by `head`.
    ///
    /// Returns `head`. Appending a segment that is already part of the chain
    /// leaves the chain unchanged.
    pub fn append_identifier(&mut self, head: IdentId, segment: IdentId) -> IdentId {
        let chain = self.identifier_chain(head);
        if chain.contains(&segment) {
            tracing::debug!(?head, ?segment, "identifier already in chain");
            return head;
        }
        if let Some(&tail) = chain.last() {
            self.get_ident_mut(tail).next = Some(segment);
        }
        head
    }

    /// Attach a part-select `[high:low]`, replacing any bit-select.
    pub fn set_identifier_range(&mut self, id: IdentId, high: ExprId, low: ExprId) {
        self.get_ident_mut(id).qualifier = IdentQualifier::Range { high, low };
    }

    /// Attach a bit-select `[index]`, replacing any part-select.
    pub fn set_identifier_index(&mut self, id: IdentId, index: ExprId) {
        self.get_ident_mut(id).qualifier = IdentQualifier::Index(index);
    }

    pub fn set_identifier_role(&mut self, id: IdentId, role: IdentRole) {
        self.get_ident_mut(id).role = role;
    }

    /// Segments of a hierarchical name, head first.
    pub fn identifier_chain(&self, head: IdentId) -> Vec<IdentId> {
        let mut chain = vec![head];
        let mut current = self.get_ident(head).next;
        while let Some(id) = current {
            if chain.contains(&id) {
                break;
            }
            chain.push(id);
            current = self.get_ident(id).next;
        }
        chain
    }

    /// Compare two identifiers by name, segment by segment.
    ///
    /// `a.b.c` equals another `a.b.c` built from different nodes, but not
    /// `a.b`. Qualifiers and roles are ignored.
    pub fn identifiers_equal(&self, a: IdentId, b: IdentId) -> bool {
        let left = self.identifier_chain(a);
        let right = self.identifier_chain(b);
        left.len() == right.len()
            && left
                .iter()
                .zip(&right)
                .all(|(&l, &r)| self.get_ident(l).name == self.get_ident(r).name)
    }
}
