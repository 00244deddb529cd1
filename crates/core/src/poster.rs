//! Poster composition.
//!
//! [`render`] maps a project's content plus a theme onto a fixed A4
//! portrait layout and returns it as a structured node tree. The tree is
//! what clients rasterize (at 2x scale, center-fitted onto the page) and
//! what the editor renders interactively.
//!
//! The renderer is a pure function: no I/O, no clock, no randomness.
//! Identical inputs always produce identical trees. It also never fails:
//! missing narrative fields become empty text blocks and a missing image
//! becomes an explicit placeholder slot.
//!
//! In [`RenderMode::Editable`] each user-owned text node carries
//! `editable: true` and its [`PosterField`] tag so the host can wire a
//! `(field, new_value)` callback per input surface. The renderer holds no
//! state; the caller owns the record and re-renders after each change.

use serde::Serialize;

use crate::themes::Theme;

/// Physical page width (A4 portrait).
pub const PAGE_WIDTH_MM: u32 = 210;

/// Physical page height (A4 portrait).
pub const PAGE_HEIGHT_MM: u32 = 297;

/// Static event label shown in the header band.
pub const EVENT_LABEL: &str = "MakerFest 2025";

/// Static event sublabel shown under the event label.
pub const EVENT_SUBLABEL: &str = "Design Thinking Portfolio";

/// Static generation stamp shown in the footer band.
pub const GENERATION_STAMP: &str = "Generated via MakerFest Portfolio • 2025";

/// Placeholder text for an empty image slot.
pub const IMAGE_PLACEHOLDER: &str = "No Image";

/// Identifies which record field a text node is bound to.
///
/// The wire value (snake_case) doubles as the callback field name the
/// editor sends back on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PosterField {
    ProjectTitle,
    StudentName,
    ClassGroup,
    ProblemStatement,
    ProjectIdea,
    HowItWorks,
    Challenges,
    LessonsLearned,
    Materials,
    FutureScope,
}

impl PosterField {
    /// Callback/wire name for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectTitle => "project_title",
            Self::StudentName => "student_name",
            Self::ClassGroup => "class_group",
            Self::ProblemStatement => "problem_statement",
            Self::ProjectIdea => "project_idea",
            Self::HowItWorks => "how_it_works",
            Self::Challenges => "challenges",
            Self::LessonsLearned => "lessons_learned",
            Self::Materials => "materials",
            Self::FutureScope => "future_scope",
        }
    }
}

/// Whether text nodes are presented as mutable input surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every user-owned field is an input surface (the student editor).
    Editable,
    /// Plain text only (teacher view, export pipeline).
    ReadOnly,
}

/// The content slice of a project record the renderer consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterContent {
    pub project_title: String,
    pub student_name: String,
    pub class_group: String,
    pub problem_statement: String,
    pub project_idea: String,
    pub how_it_works: String,
    pub challenges: String,
    pub lessons_learned: String,
    pub materials: String,
    pub future_scope: String,
    /// Local or remote reference to the project photo, if any.
    pub image_ref: Option<String>,
}

/// How a region is filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Solid { color: String },
    Gradient { from: String, to: String },
    /// Translucent white over the page background (body panels).
    Frosted,
}

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// A headed content panel.
    Panel {
        heading: Option<&'static str>,
        heading_color: String,
        fill: Fill,
        /// Overrides the document text color (e.g. white on the primary fill).
        text_color: Option<String>,
        children: Vec<Node>,
    },
    /// Side-by-side children (the 2-up challenges/learnings pair).
    Row { children: Vec<Node> },
    /// A field-bound text block.
    Text {
        field: PosterField,
        value: String,
        editable: bool,
    },
    /// The square project photo slot.
    ImageSlot {
        source: Option<String>,
        border_color: String,
        placeholder: &'static str,
    },
}

/// Header band: title/author/class over the theme gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBand {
    pub fill: Fill,
    pub title: Node,
    pub author: Node,
    pub class_group: Node,
    pub event_label: &'static str,
    pub event_sublabel: &'static str,
}

/// Footer band with the static generation stamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterBand {
    pub stamp: &'static str,
}

/// A fully composed poster, ready for rasterization or interactive display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub width_mm: u32,
    pub height_mm: u32,
    pub theme_id: String,
    pub background: String,
    pub text_color: String,
    pub header: HeaderBand,
    /// Primary column: problem, solution, mechanism, challenges/learnings.
    pub primary: Vec<Node>,
    /// Secondary column: image slot, materials, future scope.
    pub secondary: Vec<Node>,
    pub footer: FooterBand,
}

/// Compose the poster tree for one record and theme.
pub fn render(content: &PosterContent, theme: &Theme, mode: RenderMode) -> RenderedDocument {
    let editable = mode == RenderMode::Editable;
    let colors = &theme.colors;

    let text = |field: PosterField, value: &str| Node::Text {
        field,
        value: value.to_string(),
        editable,
    };

    let frosted_panel = |heading: &'static str, body: Node| Node::Panel {
        heading: Some(heading),
        heading_color: colors.accent.to_string(),
        fill: Fill::Frosted,
        text_color: None,
        children: vec![body],
    };

    let header = HeaderBand {
        fill: Fill::Gradient {
            from: colors.gradient_from.to_string(),
            to: colors.gradient_to.to_string(),
        },
        title: text(PosterField::ProjectTitle, &content.project_title),
        author: text(PosterField::StudentName, &content.student_name),
        class_group: text(PosterField::ClassGroup, &content.class_group),
        event_label: EVENT_LABEL,
        event_sublabel: EVENT_SUBLABEL,
    };

    let primary = vec![
        frosted_panel(
            "1. The Problem",
            text(PosterField::ProblemStatement, &content.problem_statement),
        ),
        frosted_panel(
            "2. The Solution",
            text(PosterField::ProjectIdea, &content.project_idea),
        ),
        frosted_panel(
            "3. How It Works",
            text(PosterField::HowItWorks, &content.how_it_works),
        ),
        Node::Row {
            children: vec![
                frosted_panel(
                    "Challenges",
                    text(PosterField::Challenges, &content.challenges),
                ),
                frosted_panel(
                    "Key Learnings",
                    text(PosterField::LessonsLearned, &content.lessons_learned),
                ),
            ],
        },
    ];

    let secondary = vec![
        Node::ImageSlot {
            source: content.image_ref.clone(),
            border_color: colors.secondary.to_string(),
            placeholder: IMAGE_PLACEHOLDER,
        },
        Node::Panel {
            heading: Some("Materials Used"),
            heading_color: "#ffffff".to_string(),
            fill: Fill::Solid {
                color: colors.primary.to_string(),
            },
            text_color: Some("#ffffff".to_string()),
            children: vec![text(PosterField::Materials, &content.materials)],
        },
        frosted_panel(
            "Future Scope",
            text(PosterField::FutureScope, &content.future_scope),
        ),
    ];

    RenderedDocument {
        width_mm: PAGE_WIDTH_MM,
        height_mm: PAGE_HEIGHT_MM,
        theme_id: theme.id.to_string(),
        background: colors.background.to_string(),
        text_color: colors.text.to_string(),
        header,
        primary,
        secondary,
        footer: FooterBand {
            stamp: GENERATION_STAMP,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{default_theme, theme_by_id};

    fn sample_content() -> PosterContent {
        PosterContent {
            project_title: "Solar Oven".into(),
            student_name: "A Name".into(),
            class_group: "8B".into(),
            problem_statement: "Cooking needs fuel.".into(),
            project_idea: "Use sunlight.".into(),
            how_it_works: "Reflectors focus heat.".into(),
            challenges: "Clouds.".into(),
            lessons_learned: "Insulation matters.".into(),
            materials: "Foil, cardboard".into(),
            future_scope: "Bigger oven.".into(),
            image_ref: Some("/uploads/1-oven.png".into()),
        }
    }

    fn collect_text(doc: &RenderedDocument) -> Vec<(PosterField, String, bool)> {
        fn walk(node: &Node, out: &mut Vec<(PosterField, String, bool)>) {
            match node {
                Node::Text {
                    field,
                    value,
                    editable,
                } => out.push((*field, value.clone(), *editable)),
                Node::Panel { children, .. } | Node::Row { children } => {
                    for child in children {
                        walk(child, out);
                    }
                }
                Node::ImageSlot { .. } => {}
            }
        }

        let mut out = Vec::new();
        for node in [&doc.header.title, &doc.header.author, &doc.header.class_group] {
            walk(node, &mut out);
        }
        for node in doc.primary.iter().chain(doc.secondary.iter()) {
            walk(node, &mut out);
        }
        out
    }

    #[test]
    fn render_is_deterministic() {
        let content = sample_content();
        let theme = theme_by_id("ocean-blue").unwrap();

        let first = render(&content, theme, RenderMode::ReadOnly);
        let second = render(&content, theme, RenderMode::ReadOnly);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn read_only_has_no_editable_nodes() {
        let doc = render(&sample_content(), default_theme(), RenderMode::ReadOnly);
        assert!(collect_text(&doc).iter().all(|(_, _, editable)| !editable));
    }

    #[test]
    fn editable_marks_every_field_once() {
        let doc = render(&sample_content(), default_theme(), RenderMode::Editable);
        let texts = collect_text(&doc);

        assert!(texts.iter().all(|(_, _, editable)| *editable));

        // All ten user-owned fields appear exactly once.
        let mut fields: Vec<&str> = texts.iter().map(|(f, _, _)| f.as_str()).collect();
        fields.sort_unstable();
        let mut expected = vec![
            "challenges",
            "class_group",
            "future_scope",
            "how_it_works",
            "lessons_learned",
            "materials",
            "problem_statement",
            "project_idea",
            "project_title",
            "student_name",
        ];
        expected.sort_unstable();
        assert_eq!(fields, expected);
    }

    #[test]
    fn missing_image_renders_placeholder_slot() {
        let mut content = sample_content();
        content.image_ref = None;

        let doc = render(&content, default_theme(), RenderMode::ReadOnly);
        match &doc.secondary[0] {
            Node::ImageSlot {
                source,
                placeholder,
                ..
            } => {
                assert!(source.is_none());
                assert_eq!(*placeholder, IMAGE_PLACEHOLDER);
            }
            other => panic!("expected image slot, got {other:?}"),
        }
    }

    #[test]
    fn empty_content_never_errors() {
        let doc = render(&PosterContent::default(), default_theme(), RenderMode::Editable);
        assert_eq!(doc.width_mm, 210);
        assert_eq!(doc.height_mm, 297);
    }

    #[test]
    fn theme_tokens_flow_into_tree() {
        let theme = theme_by_id("eco-green").unwrap();
        let doc = render(&sample_content(), theme, RenderMode::ReadOnly);

        assert_eq!(doc.background, theme.colors.background);
        assert_eq!(doc.theme_id, "eco-green");
        match &doc.header.fill {
            Fill::Gradient { from, to } => {
                assert_eq!(from, theme.colors.gradient_from);
                assert_eq!(to, theme.colors.gradient_to);
            }
            other => panic!("expected gradient header, got {other:?}"),
        }

        // Materials panel carries the primary fill and white text.
        match &doc.secondary[1] {
            Node::Panel {
                fill, text_color, ..
            } => {
                assert_eq!(
                    *fill,
                    Fill::Solid {
                        color: theme.colors.primary.to_string()
                    }
                );
                assert_eq!(text_color.as_deref(), Some("#ffffff"));
            }
            other => panic!("expected materials panel, got {other:?}"),
        }
    }
}
