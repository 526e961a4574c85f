/// Default stylesheet embedded into composed documents.
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/styles.css");

/// Default interaction script embedded into composed documents.
///
/// Shipped CDATA-guarded so the composed document stays well-formed XML with
/// the payload embedded verbatim.
pub const DEFAULT_SCRIPT: &str = include_str!("../assets/scripts.js");

/// Sizing constants and embedded payloads for document composition.
///
/// The scale/offset defaults are calibrated to a MathJax-style formula
/// renderer reporting ex units; an adapter with a different unit system
/// needs these recalibrated, which is why they are plain fields rather than
/// constants.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Total width of the emitted document in SVG user units, margins included.
    pub document_width: f64,
    /// Total height of the emitted document in SVG user units, margins included.
    pub document_height: f64,
    /// Converts the formula renderer's native units into document units when
    /// sizing node containers.
    pub formula_scale: f64,
    /// Lower bound for a node container's width and height, in document units.
    /// Also feeds the outer margin: half a minimum box must fit past the
    /// canvas edge so boxes anchored there do not clip.
    pub min_node_size: f64,
    /// Stroke width the embedded stylesheet draws node outlines with; the
    /// margin reserves it on each side.
    pub stroke_width: f64,
    /// Corner radius of node container rectangles.
    pub corner_radius: f64,
    /// Centering factor for embedded fragments: the fragment group is
    /// translated by `-intrinsic_dim * fragment_offset` per axis.
    pub fragment_offset: f64,
    /// Stylesheet embedded verbatim into every composed document.
    pub stylesheet: String,
    /// Script embedded verbatim into every composed document.
    pub script: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            document_width: 660.0,
            document_height: 550.0,
            formula_scale: 9.0,
            min_node_size: 30.0,
            stroke_width: 2.0,
            corner_radius: 7.0,
            fragment_offset: 4.0,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Margin reserved on each side of the canvas: `min_node_size / 2 +
    /// stroke_width`.
    pub fn margin(&self) -> f64 {
        self.min_node_size / 2.0 + self.stroke_width
    }

    /// Width of the layout canvas (document width minus both margins).
    pub fn canvas_width(&self) -> f64 {
        (self.document_width - 2.0 * self.margin()).max(1.0)
    }

    /// Height of the layout canvas (document height minus both margins).
    pub fn canvas_height(&self) -> f64 {
        (self.document_height - 2.0 * self.margin()).max(1.0)
    }
}
