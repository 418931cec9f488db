use crate::foundation::core::{Point, Rect};
use crate::layout::discovery::ElementRegistry;

/// Approximate advance of one monospace character at the question font size.
pub const CHAR_WIDTH_PX: f64 = 8.4;
/// Horizontal padding on each side of a question label.
pub const PADDING_X: f64 = 12.0;
/// Height of a single-line question element.
pub const ELEMENT_HEIGHT: f64 = 36.0;
/// Question elements never grow past this width.
pub const MAX_ELEMENT_WIDTH: f64 = 200.0;

/// One mounted question label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct QuestionElement {
    pub id: String,
    /// `$ <question>` as shown on the page.
    pub label: String,
    /// Centre in viewport coordinates.
    pub center: Point,
    pub tilt_deg: f64,
    pub selected: bool,
}

impl QuestionElement {
    pub fn new(id: impl Into<String>, question: &str, center: Point, tilt_deg: f64) -> Self {
        Self {
            id: id.into(),
            label: format!("$ {question}"),
            center,
            tilt_deg,
            selected: false,
        }
    }

    /// Estimated laid-out size of the label box.
    pub fn size(&self) -> (f64, f64) {
        let text_w = self.label.chars().count() as f64 * CHAR_WIDTH_PX;
        ((text_w + 2.0 * PADDING_X).min(MAX_ELEMENT_WIDTH), ELEMENT_HEIGHT)
    }

    /// Axis-aligned box around the centre, ignoring tilt.
    pub fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        Rect::from_center_size(self.center, (w, h))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}

/// The set of mounted question elements; the snapshot layout discovery reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementTree {
    elements: Vec<QuestionElement>,
}

impl ElementTree {
    pub fn new(elements: Vec<QuestionElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[QuestionElement] {
        &self.elements
    }

    pub fn get(&self, id: &str) -> Option<&QuestionElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Mark `selected` on the element whose id equals `active`, clear it everywhere else.
    pub fn select(&mut self, active: Option<&str>) {
        for e in &mut self.elements {
            e.selected = active == Some(e.id.as_str());
        }
    }

    /// Topmost element under `p`, if any.
    pub fn hit(&self, p: Point) -> Option<&QuestionElement> {
        self.elements.iter().rev().find(|e| e.contains(p))
    }

    pub fn unmount(&mut self) {
        self.elements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementRegistry for ElementTree {
    fn question_bounds(&self, id: &str) -> Option<Rect> {
        self.get(id).map(QuestionElement::bounds)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/elements.rs"]
mod tests;
