use crate::foundation::core::Rgba;

pub const BACKGROUND: Rgba = Rgba::opaque(0x12, 0x12, 0x12);
pub const TERMINAL_GREEN: Rgba = Rgba::opaque(0x00, 0xff, 0x00);
pub const TERMINAL_DIM_GREEN: Rgba = Rgba::opaque(0x00, 0xcc, 0x00);
pub const TERMINAL_GRAY: Rgba = Rgba::opaque(0xab, 0xab, 0xab);
pub const TERMINAL_WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);

/// Base colour of hub, silhouette and mesh lines; alpha is `progress * 0.6`.
pub const CONNECTION: Rgba = Rgba::new(0, 100, 0, 0.6);
pub const CONNECTION_GLOW: Rgba = Rgba::new(0, 100, 0, 0.4);
pub const BEAM_BASELINE: Rgba = Rgba::new(0, 100, 0, 0.3);
pub const BEAM: Rgba = Rgba::new(120, 255, 120, 0.9);
pub const BEAM_GLOW: Rgba = Rgba::new(50, 255, 50, 0.8);
pub const PULSE: Rgba = Rgba::new(150, 255, 150, 0.9);
pub const NODE_ACTIVE: Rgba = Rgba::new(100, 255, 100, 0.9);
pub const NODE_IDLE: Rgba = Rgba::new(0, 255, 0, 0.6);
pub const SILHOUETTE: Rgba = Rgba::new(0, 100, 0, 0.5);
pub const SILHOUETTE_GLYPH: Rgba = Rgba::new(0, 100, 0, 0.2);
pub const AMBIENT_GLYPH: Rgba = Rgba::new(0, 255, 0, 0.05);

/// Terminal panel fill and border.
pub const PANEL_FILL: Rgba = Rgba::new(0, 0, 0, 0.85);
pub const PANEL_BORDER: Rgba = Rgba::new(0, 255, 0, 0.4);
pub const ANSWER_FILL: Rgba = Rgba::new(0, 0, 0, 0.7);
/// Question label fill, idle and selected.
pub const QUESTION_FILL: Rgba = Rgba::new(0, 0, 0, 0.5);
pub const QUESTION_FILL_SELECTED: Rgba = Rgba::new(0, 255, 0, 0.2);
pub const QUESTION_BORDER: Rgba = Rgba::new(0, 255, 0, 0.4);
