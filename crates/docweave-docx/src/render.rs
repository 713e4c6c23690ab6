//! Render-time state threaded through the XML serializers

use ahash::AHashMap;

use crate::drawing::Drawing;

/// Resolves cross-part references while the content tree is serialized.
///
/// The writer builds one context per save from the relationship plan, so
/// drawings and header/footer references render the IDs that actually appear
/// in `document.xml.rels`. The same context is used for the body and every
/// header and footer, which keeps `docPr` ids unique across the package.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    header_rels: Vec<String>,
    footer_rels: Vec<String>,
    image_rels: AHashMap<String, String>,
    drawing_rels: AHashMap<usize, String>,
    next_shape_id: u32,
    detached: bool,
}

impl RenderContext {
    /// Context backed by allocated relationships.
    ///
    /// `image_rels` maps media targets to IDs. Drawings registered with
    /// [`RenderContext::bind_drawing`] take precedence over their target.
    pub fn new(
        header_rels: Vec<String>,
        footer_rels: Vec<String>,
        image_rels: AHashMap<String, String>,
    ) -> Self {
        Self {
            header_rels,
            footer_rels,
            image_rels,
            drawing_rels: AHashMap::new(),
            next_shape_id: 0,
            detached: false,
        }
    }

    /// Pin the relationship ID rendered for one drawing instance
    pub fn bind_drawing(&mut self, drawing: &Drawing, id: String) {
        self.drawing_rels.insert(drawing_key(drawing), id);
    }

    /// Context for rendering a fragment outside of a package.
    ///
    /// Image targets get placeholder IDs numbered in first-seen order and
    /// header/footer references render with an empty ID.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// Relationship ID of the header part at `index`
    pub fn header_rel(&self, index: usize) -> &str {
        self.part_rel(&self.header_rels, index, "header")
    }

    /// Relationship ID of the footer part at `index`
    pub fn footer_rel(&self, index: usize) -> &str {
        self.part_rel(&self.footer_rels, index, "footer")
    }

    fn part_rel<'a>(&self, rels: &'a [String], index: usize, kind: &str) -> &'a str {
        match rels.get(index) {
            Some(id) => id,
            None => {
                if !self.detached {
                    log::warn!("section references missing {} #{}", kind, index + 1);
                }
                ""
            }
        }
    }

    /// Relationship ID of a drawing's image
    pub fn drawing_rel(&mut self, drawing: &Drawing) -> String {
        match self.drawing_rels.get(&drawing_key(drawing)) {
            Some(id) => id.clone(),
            None => self.image_rel(&drawing.media_target()),
        }
    }

    /// Relationship ID for an image part target (e.g. `media/logo.png`)
    pub fn image_rel(&mut self, target: &str) -> String {
        if let Some(id) = self.image_rels.get(target) {
            return id.clone();
        }
        let id = format!("rId{}", self.image_rels.len() + 1);
        if !self.detached {
            log::warn!("image {} has no allocated relationship", target);
        }
        self.image_rels.insert(target.to_string(), id.clone());
        id
    }

    /// Next drawing object id (`wp:docPr id`), starting at 1
    pub fn next_shape_id(&mut self) -> u32 {
        self.next_shape_id += 1;
        self.next_shape_id
    }
}

/// Drawings are bound by address; the plan and the render pass borrow the
/// same document.
fn drawing_key(drawing: &Drawing) -> usize {
    drawing as *const Drawing as usize
}
