use serde::{Deserialize, Serialize};

/// Feature toggles and size policy for the highlight pass.
///
/// The engine never reads ambient settings; hosts build one of these
/// (typically via the config crate) and pass it into every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Scale heading text by level instead of only coloring it.
    pub bigger_headings: bool,
    /// Shade trailing double-space (hard line break) runs.
    pub highlight_line_endings: bool,
    /// Shade inline code and indented code blocks.
    pub highlight_code_blocks: bool,
    /// Render code in a monospace face.
    pub monospace_code: bool,
    /// Debounce delay before re-highlighting a large document.
    pub delay_ms: u64,
    /// Documents at or below this length highlight synchronously.
    pub small_doc_limit: usize,
    /// Above this length the background passes (code shading, line
    /// endings) are skipped.
    pub downgrade_above: usize,
    /// Above this length highlighting is disabled entirely.
    pub disable_above: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            bigger_headings: true,
            highlight_line_endings: true,
            highlight_code_blocks: true,
            monospace_code: true,
            delay_ms: 650,
            small_doc_limit: 2_500,
            downgrade_above: 30_000,
            disable_above: 120_000,
        }
    }
}

/// Auto-format knobs: which bullet new items get and how indentation is
/// measured when deciding list nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Bullet character used when toggling a line into an unordered list.
    pub bullet: char,
    /// Spaces inserted/removed by the indent and deindent actions.
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            bullet: '-',
            indent_width: 4,
        }
    }
}

/// Everything a host needs to drive one editing session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub highlight: HighlightConfig,
    pub format: FormatConfig,
}
