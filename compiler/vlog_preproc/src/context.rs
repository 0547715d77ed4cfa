//! Preprocessor context and the stateful directive handlers.
//!
//! The context is the single owner of everything the preprocessor learns
//! while a session is parsed: macros, the conditional stack, the include
//! stack, and the directive history. The scanner calls one handler per
//! directive and consults [`PreprocessorContext::emit`] before passing any
//! other token on.

use std::path::PathBuf;

use vlog_ir::{AstList, AstStack, AstTable, NetType, PrimitiveStrength};

use crate::PreprocError;

/// A `` `define `` as last seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroDefinition {
    pub line: u32,
    pub name: String,
    pub value: String,
}

/// One level of `` `ifdef ``/`` `ifndef `` nesting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalFrame {
    /// Macro tested by the current branch; `None` once in the `` `else ``.
    pub condition: Option<String>,
    /// Line of the opening `` `ifdef ``/`` `ifndef ``.
    pub line: u32,
    /// The current branch is selected.
    pub passed: bool,
    /// Opened by `` `ifndef ``.
    pub is_ndef: bool,
    /// No later branch of this conditional may be selected.
    pub wait_for_endif: bool,
    /// An `` `else `` has been seen.
    pub seen_else: bool,
}

impl ConditionalFrame {
    /// Tokens in the current branch reach the grammar.
    pub fn is_active(&self) -> bool {
        self.passed && !self.wait_for_endif
    }
}

/// An `` `include `` as encountered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeDirective {
    pub file: String,
    pub line: u32,
    /// Where the resolver found the file, if it did.
    pub path: Option<PathBuf>,
}

impl IncludeDirective {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// A `` `default_nettype `` occurrence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DefaultNetTypeDirective {
    /// Tokens seen before the directive.
    pub token_number: u32,
    pub line: u32,
    pub net_type: NetType,
}

/// `` `timescale unit/precision ``, kept as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timescale {
    pub unit: String,
    pub precision: String,
}

/// `` `line number "file" level ``
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDirective {
    pub line: u32,
    pub file: String,
    /// 0: no include change, 1: entering an include, 2: leaving one.
    pub level: u8,
}

/// Per-session preprocessor state.
#[derive(Debug)]
pub struct PreprocessorContext {
    pub(crate) emit: bool,
    pub(crate) token_count: u32,
    pub(crate) in_cell_define: bool,
    pub(crate) current_file: AstStack<String>,
    pub(crate) open_includes: usize,
    pub(crate) macros: AstTable<MacroDefinition>,
    pub(crate) includes: AstList<IncludeDirective>,
    pub(crate) net_types: AstList<DefaultNetTypeDirective>,
    pub(crate) default_net_type: NetType,
    pub(crate) timescale: Timescale,
    pub(crate) unconnected_drive: PrimitiveStrength,
    pub(crate) ifdefs: AstStack<ConditionalFrame>,
    pub(crate) search_dirs: Vec<PathBuf>,
    pub(crate) line_directives: AstList<LineDirective>,
}

impl PreprocessorContext {
    pub fn new() -> Self {
        PreprocessorContext {
            emit: true,
            token_count: 0,
            in_cell_define: false,
            current_file: AstStack::new(),
            open_includes: 0,
            macros: AstTable::new(),
            includes: AstList::new(),
            net_types: AstList::new(),
            default_net_type: NetType::default(),
            timescale: Timescale::default(),
            unconnected_drive: PrimitiveStrength::None,
            ifdefs: AstStack::new(),
            search_dirs: Vec::new(),
            line_directives: AstList::new(),
        }
    }

    /// Context whose `` `include `` lookups search `dirs` in order.
    pub fn with_search_dirs(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut context = Self::new();
        context.search_dirs.extend(dirs);
        context
    }

    pub fn add_search_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_dirs.push(dir.into());
    }

    /// Record the file parsing starts from. Only the first call has an effect.
    pub fn set_root_file(&mut self, file: impl Into<String>) {
        if self.current_file.is_empty() {
            self.current_file.push(file.into());
        }
    }

    // ===== Token gating =====

    /// Whether the scanner should pass tokens on: true when no conditional is
    /// open or the innermost branch is selected.
    pub fn emit(&self) -> bool {
        self.emit
    }

    pub(crate) fn refresh_emit(&mut self) {
        self.emit = self.ifdefs.peek().map_or(true, ConditionalFrame::is_active);
    }

    /// Count one scanned token and return the new total.
    pub fn count_token(&mut self) -> u32 {
        self.token_count = self.token_count.saturating_add(1);
        self.token_count
    }

    // ===== Simple directives =====

    /// `` `celldefine ``
    pub fn cell_define(&mut self, line: u32) {
        tracing::trace!(line, "celldefine");
        self.in_cell_define = true;
    }

    /// `` `endcelldefine ``
    pub fn end_cell_define(&mut self, line: u32) {
        tracing::trace!(line, "endcelldefine");
        self.in_cell_define = false;
    }

    /// `` `default_nettype ``. Every occurrence is kept in order.
    pub fn default_net_type(&mut self, line: u32, net_type: NetType) {
        tracing::trace!(line, net_type = net_type.as_str(), "default_nettype");
        self.net_types.push(DefaultNetTypeDirective {
            token_number: self.token_count,
            line,
            net_type,
        });
        self.default_net_type = net_type;
    }

    /// `` `resetall ``: net type, cell define and unconnected drive go back
    /// to their initial values.
    pub fn reset_all(&mut self, line: u32) {
        tracing::trace!(line, "resetall");
        self.default_net_type = NetType::default();
        self.in_cell_define = false;
        self.unconnected_drive = PrimitiveStrength::None;
    }

    /// `` `unconnected_drive pull0|pull1 ``
    pub fn unconnected_drive(
        &mut self,
        line: u32,
        pull: PrimitiveStrength,
    ) -> Result<(), PreprocError> {
        if !matches!(pull, PrimitiveStrength::Pull0 | PrimitiveStrength::Pull1) {
            return Err(PreprocError::InvalidUnconnectedDrive {
                line,
                found: format!("{pull:?}").to_lowercase(),
            });
        }
        tracing::trace!(line, ?pull, "unconnected_drive");
        self.unconnected_drive = pull;
        Ok(())
    }

    /// `` `nounconnected_drive ``
    pub fn no_unconnected_drive(&mut self, line: u32) {
        tracing::trace!(line, "nounconnected_drive");
        self.unconnected_drive = PrimitiveStrength::None;
    }

    /// `` `timescale unit/precision ``; the last one wins.
    pub fn timescale(&mut self, line: u32, unit: &str, precision: &str) {
        tracing::trace!(line, unit, precision, "timescale");
        self.timescale = Timescale {
            unit: unit.to_owned(),
            precision: precision.to_owned(),
        };
    }

    /// `` `line number "file" level ``
    pub fn line_directive(&mut self, line: u32, target_line: u32, file: &str, level: u8) {
        tracing::trace!(line, target_line, file, level, "line directive");
        self.line_directives.push(LineDirective {
            line: target_line,
            file: file.to_owned(),
            level,
        });
    }

    // ===== Accessors =====

    pub fn token_count(&self) -> u32 {
        self.token_count
    }

    pub fn in_cell_define(&self) -> bool {
        self.in_cell_define
    }

    /// Net type currently in effect.
    pub fn current_net_type(&self) -> NetType {
        self.default_net_type
    }

    /// Every `` `default_nettype `` seen, oldest first.
    pub fn net_types(&self) -> &AstList<DefaultNetTypeDirective> {
        &self.net_types
    }

    pub fn current_timescale(&self) -> &Timescale {
        &self.timescale
    }

    /// Active unconnected drive; `PrimitiveStrength::None` when unset.
    pub fn current_unconnected_drive(&self) -> PrimitiveStrength {
        self.unconnected_drive
    }

    pub fn includes(&self) -> &AstList<IncludeDirective> {
        &self.includes
    }

    pub fn line_directives(&self) -> &AstList<LineDirective> {
        &self.line_directives
    }

    /// File currently being scanned.
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.peek().map(String::as_str)
    }

    /// Number of files open, the root file included.
    pub fn file_depth(&self) -> usize {
        self.current_file.depth()
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    pub fn macros(&self) -> &AstTable<MacroDefinition> {
        &self.macros
    }

    /// Number of open conditionals.
    pub fn conditional_depth(&self) -> usize {
        self.ifdefs.depth()
    }

    /// Innermost open conditional.
    pub fn current_conditional(&self) -> Option<&ConditionalFrame> {
        self.ifdefs.peek()
    }
}

impl Default for PreprocessorContext {
    fn default() -> Self {
        Self::new()
    }
}
