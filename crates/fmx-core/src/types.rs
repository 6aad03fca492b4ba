/// Placeholder used when a `Group` element carries no `name` attribute.
pub const UNNAMED_GROUP: &str = "UnnamedGroup";
/// Placeholder used when a `Script` element carries no `name` attribute.
pub const UNNAMED_SCRIPT: &str = "UnnamedScript";

/// Label of the FileMaker comment step as it appears in exported catalogs.
/// Steps with this name are annotations and never produce output lines.
pub const COMMENT_STEP_NAME: &str = "# (コメント)";

/// One indentation level in formatted script text.
pub const INDENT_UNIT: &str = "    ";

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    Group(CatalogGroup),
    Script(CatalogScript),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogGroup {
    pub name: String,
    pub children: Vec<CatalogNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogScript {
    pub name: String,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub name: String,
    pub enabled: bool,
    pub text: String,
}

/// Control-flow role of a step, decided by exact match on its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Opens a block; the body is indented one level deeper.
    BlockStart,
    /// Closes a block; emitted at the level of the opener.
    BlockEnd,
    /// `Else` / `Else If`; emitted at the opener's level, body re-indented.
    BlockBranch,
    Plain,
}

impl StepKind {
    pub fn of(step_name: &str) -> Self {
        match step_name {
            "Loop" | "If" => StepKind::BlockStart,
            "End Loop" | "End If" => StepKind::BlockEnd,
            "Else" | "Else If" => StepKind::BlockBranch,
            _ => StepKind::Plain,
        }
    }
}
