//! JSON block descriptions.
//!
//! A description names every inset explicitly; a missing `margin`,
//! `border` or `padding` is a parse error rather than a silent zero.
//!
//! ```json
//! {
//!   "id": "title",
//!   "margin":  { "top": {"absolute": 5}, "left": {"absolute": 5}, "bottom": {"absolute": 5}, "right": {"absolute": 5} },
//!   "border":  { "top": {"absolute": 0}, "left": {"absolute": 0}, "bottom": {"absolute": 0}, "right": {"absolute": 0} },
//!   "padding": { "top": {"relative": 0.1}, "left": {"absolute": 2}, "bottom": {"relative": 0.1}, "right": {"absolute": 2} },
//!   "content": { "kind": "label", "text": "Revenue", "font_size": 14 }
//! }
//! ```

use plinth_block::{Block, EmptyContent, FixedContent, Insets, LabelContent, LayoutResult};
use serde::Deserialize;

/// A block and everything nested inside it.
#[derive(Debug, Deserialize)]
pub struct BlockDescription {
    /// Identifier shown in reports and traces.
    #[serde(default)]
    pub id: Option<String>,
    /// Outermost spacing.
    pub margin: Insets,
    /// Frame spacing.
    pub border: Insets,
    /// Innermost spacing.
    pub padding: Insets,
    /// Declared width, used when there is no content.
    #[serde(default)]
    pub width: f64,
    /// Declared height, used when there is no content.
    #[serde(default)]
    pub height: f64,
    /// What sits inside the block.
    #[serde(default)]
    pub content: Option<ContentDescription>,
}

/// The content of a described block.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentDescription {
    /// Fills whatever it is given.
    Empty,
    /// A constant natural size.
    Fixed {
        /// Natural width.
        width: f64,
        /// Natural height.
        height: f64,
    },
    /// Text measured with approximate metrics.
    Label {
        /// Label text.
        text: String,
        /// Font size in surface units.
        font_size: f64,
    },
    /// Another block.
    Block(Box<BlockDescription>),
}

impl BlockDescription {
    /// Turn the description into a block tree ready to arrange.
    ///
    /// # Errors
    ///
    /// Any invalid length (declared size, fixed content, font size) anywhere
    /// in the tree.
    pub fn build(self) -> LayoutResult<Block> {
        let mut block = Block::new();
        match self.content {
            None => {}
            Some(ContentDescription::Empty) => block.set_content(EmptyContent),
            Some(ContentDescription::Fixed { width, height }) => {
                block.set_content(FixedContent::new(width, height)?);
            }
            Some(ContentDescription::Label { text, font_size }) => {
                block.set_content(LabelContent::new(text, font_size)?);
            }
            Some(ContentDescription::Block(inner)) => block.set_content(inner.build()?),
        }
        if let Some(id) = self.id {
            block.set_id(id);
        }
        block.set_margin(self.margin);
        block.set_border(self.border);
        block.set_padding(self.padding);
        block.set_width(self.width)?;
        block.set_height(self.height)?;
        Ok(block)
    }
}
