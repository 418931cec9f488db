use std::path::Path;

use crate::foundation::core::Rgba;
use crate::foundation::error::{WhisperError, WhisperResult};

/// RGBA8 brush colour carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba> for TextBrush {
    fn from(c: Rgba) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        Self { r, g, b, a }
    }
}

/// Read a font file for the terminal text.
pub fn load_font(path: &Path) -> WhisperResult<Vec<u8>> {
    let bytes = std::fs::read(path)
        .map_err(|e| WhisperError::render(format!("read font '{}': {e}", path.display())))?;
    if bytes.is_empty() {
        return Err(WhisperError::render(format!(
            "font '{}' is empty",
            path.display()
        )));
    }
    Ok(bytes)
}

/// Parley font and layout contexts bound to one registered font family.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl TextLayoutEngine {
    /// Register `font_bytes` and keep its first family as the default stack.
    pub fn new(font_bytes: &[u8]) -> WhisperResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| WhisperError::render("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| WhisperError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Shape and lay out plain text, wrapped at `max_width_px` when given.
    pub fn layout_plain(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
        max_width_px: Option<f32>,
    ) -> WhisperResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(WhisperError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(max_width_px);
        if let Some(w) = max_width_px {
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        }
        Ok(layout)
    }
}
