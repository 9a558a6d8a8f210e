use crate::core::DEFAULT_DECIMALS;

/// How `ram:LineID` values are assigned to line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineNumbering {
    /// 1-based running index in line order.
    #[default]
    Sequential,
    /// `"1"` on every line. Reproduces the output of older generators;
    /// line IDs are then not unique.
    Constant,
}

impl LineNumbering {
    /// The line ID for the line at zero-based `index`.
    pub fn line_id(&self, index: usize) -> String {
        match self {
            Self::Sequential => (index + 1).to_string(),
            Self::Constant => "1".to_string(),
        }
    }
}

/// Options for [`to_xml_with`](super::to_xml_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Line ID strategy.
    pub line_numbering: LineNumbering,
    /// Fail with `MissingRequiredParty` when buyer or seller is absent.
    /// When false the party block is left out.
    pub require_parties: bool,
    /// Fractional digits of monetary amounts.
    pub amount_decimals: u32,
    /// Spaces per nesting level; `None` for compact output.
    pub indent: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbering: LineNumbering::default(),
            require_parties: true,
            amount_decimals: DEFAULT_DECIMALS,
            indent: Some(2),
        }
    }
}

impl RenderOptions {
    pub fn with_line_numbering(mut self, numbering: LineNumbering) -> Self {
        self.line_numbering = numbering;
        self
    }

    pub fn with_require_parties(mut self, require: bool) -> Self {
        self.require_parties = require;
        self
    }

    pub fn with_amount_decimals(mut self, decimals: u32) -> Self {
        self.amount_decimals = decimals;
        self
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }
}
