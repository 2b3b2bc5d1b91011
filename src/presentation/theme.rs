//! Design tokens for report output.
//!
//! All colors and rule characters used by the renderer come from here.

pub mod colors {
    use crossterm::style::Color;

    /// Referenced assets
    pub const SUCCESS: Color = Color::Green;
    /// Unreferenced assets
    pub const WARNING: Color = Color::Yellow;
    /// Section titles
    pub const INFO: Color = Color::Cyan;
    /// Secondary detail (reference lists, rules)
    pub const DIM: Color = Color::DarkGrey;
}

/// Character repeated to draw section rules
pub const RULE_CHAR: char = '=';

/// Width of a section rule
pub const RULE_WIDTH: usize = 60;

/// A full-width section rule
pub fn rule() -> String {
    RULE_CHAR.to_string().repeat(RULE_WIDTH)
}
