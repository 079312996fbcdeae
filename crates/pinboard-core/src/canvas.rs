//! Canvas document: the ordered element collection.

use crate::elements::{CanvasElement, ElementId, ElementKind};
use kurbo::{Point, Rect};
use serde::Serialize;
use uuid::Uuid;

/// The elements placed on a board, back to front.
///
/// Insertion order is paint order. Ids come from a counter that is never
/// rewound, so an id stays unique for the document's lifetime even across
/// [`CanvasDocument::clear_all`].
#[derive(Debug, Clone, Serialize)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    elements: Vec<CanvasElement>,
    next_id: u64,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            elements: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new element of `kind` at a canvas-space point.
    pub fn create_element(&mut self, kind: ElementKind, canvas_point: Point) -> &CanvasElement {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(CanvasElement::new(id, kind, canvas_point));
        log::debug!(
            "Created {} {} at ({:.1}, {:.1})",
            kind.name(),
            id,
            canvas_point.x,
            canvas_point.y
        );
        &self.elements[self.elements.len() - 1]
    }

    /// Move an element to a new canvas-space position.
    ///
    /// Unknown ids are ignored; a drag can outlive the element it started on.
    /// Returns true if an element was moved.
    pub fn update_element_position(&mut self, id: ElementId, canvas_point: Point) -> bool {
        match self.elements.iter_mut().find(|el| el.id == id) {
            Some(element) => {
                element.position = canvas_point;
                true
            }
            None => {
                log::trace!("Ignoring position update for missing element {}", id);
                false
            }
        }
    }

    /// Remove every element.
    pub fn clear_all(&mut self) {
        if !self.elements.is_empty() {
            log::debug!("Clearing {} elements", self.elements.len());
        }
        self.elements.clear();
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in paint order (back to front).
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Topmost element under a canvas-space point.
    pub fn element_at(&self, canvas_point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|el| el.hit_test(canvas_point))
            .map(CanvasElement::id)
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(CanvasElement::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
