//! Compile-time table of slide methods.
//!
//! Each entry ties a request method name to a slide kind, its positional
//! parameter list and the decoder that turns JSON arguments into content.
//! Brand availability comes from the kind, so both brands share one table.

use serde_json::Value;

use crate::models::error::{GenerationError, SlideError};
use crate::models::slide::*;
use crate::models::theme::Brand;

use super::params::{ParamSpec, Params};

type Decoder = fn(&Params<'_>) -> Result<SlideContent, SlideError>;

pub struct SlideMethod {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: SlideKind,
    pub params: &'static [ParamSpec],
    decode: Decoder,
}

impl SlideMethod {
    /// Check arity and shape, then build the content. Nothing is rendered.
    pub fn decode(&self, values: &[Value]) -> Result<SlideContent, SlideError> {
        let params = Params::bind(values, self.params)?;
        (self.decode)(&params)
    }

    pub fn matches(&self, method: &str) -> bool {
        self.name == method || self.aliases.contains(&method)
    }

    pub fn available_for(&self, brand: Brand) -> bool {
        self.kind.available_for(brand)
    }
}

impl std::fmt::Debug for SlideMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideMethod")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

use ParamSpec as P;

pub static REGISTRY: &[SlideMethod] = &[
    SlideMethod {
        name: "createTitleSlide",
        aliases: &[],
        kind: SlideKind::Title,
        params: &[P::required("lineOne"), P::required("lineTwo"), P::optional("subtitle")],
        decode: decode_title,
    },
    SlideMethod {
        name: "createContentSlide",
        aliases: &[],
        kind: SlideKind::Content,
        params: &[P::required("title"), P::optional("bullets")],
        decode: decode_content,
    },
    SlideMethod {
        name: "createExecutiveSummary",
        aliases: &[],
        kind: SlideKind::ExecutiveSummary,
        params: &[P::required("title"), P::required("metrics")],
        decode: decode_executive_summary,
    },
    SlideMethod {
        name: "createTableSlide",
        aliases: &["createDataTable"],
        kind: SlideKind::DataTable,
        params: &[
            P::required("title"),
            P::required("headers"),
            P::required("rows"),
            P::optional("options"),
        ],
        decode: decode_table,
    },
    SlideMethod {
        name: "createFrameworkSlide",
        aliases: &[],
        kind: SlideKind::Framework,
        params: &[P::required("title"), P::required("boxes")],
        decode: decode_framework,
    },
    SlideMethod {
        name: "createTimeline",
        aliases: &[],
        kind: SlideKind::Timeline,
        params: &[P::required("title"), P::required("phases")],
        decode: decode_timeline,
    },
    SlideMethod {
        name: "createKeyMessages",
        aliases: &[],
        kind: SlideKind::KeyMessages,
        params: &[P::required("title"), P::required("messages")],
        decode: decode_key_messages,
    },
    SlideMethod {
        name: "createNextSteps",
        aliases: &[],
        kind: SlideKind::NextSteps,
        params: &[P::required("title"), P::required("steps")],
        decode: decode_next_steps,
    },
    SlideMethod {
        name: "createSectionSlide",
        aliases: &["createSectionDivider"],
        kind: SlideKind::SectionDivider,
        params: &[P::required("heading")],
        decode: decode_section,
    },
    SlideMethod {
        name: "createNumberedFramework",
        aliases: &[],
        kind: SlideKind::NumberedFramework,
        params: &[P::required("title"), P::required("items"), P::optional("closingStat")],
        decode: decode_numbered_framework,
    },
    SlideMethod {
        name: "createCaseStudy",
        aliases: &["createInvestmentCase"],
        kind: SlideKind::CaseStudy,
        params: &[P::required("title"), P::required("case")],
        decode: decode_case_study,
    },
];

/// Registry entry for a method name or alias, regardless of brand.
pub fn lookup(method: &str) -> Option<&'static SlideMethod> {
    REGISTRY.iter().find(|m| m.matches(method))
}

/// Registry entry for a method the brand actually exposes.
pub fn lookup_for(brand: Brand, method: &str) -> Option<&'static SlideMethod> {
    lookup(method).filter(|m| m.available_for(brand))
}

pub fn methods_for(brand: Brand) -> impl Iterator<Item = &'static SlideMethod> {
    REGISTRY.iter().filter(move |m| m.available_for(brand))
}

/// Canonical method names exposed for a presentation `type`.
pub fn list_available_slide_methods(presentation_type: &str) -> Result<Vec<&'static str>, GenerationError> {
    let brand = Brand::parse(presentation_type)
        .ok_or_else(|| GenerationError::UnknownPresentationType(presentation_type.to_string()))?;
    Ok(methods_for(brand).map(|m| m.name).collect())
}

fn decode_title(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::Title(TitleContent {
        line_one: p.text(0)?,
        line_two: p.text(1)?,
        subtitle: p.opt_text(2)?,
    }))
}

fn decode_content(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::Content(ContentSlide {
        title: p.text(0)?,
        bullets: p.opt_decode(1)?.unwrap_or_default(),
    }))
}

fn decode_executive_summary(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::ExecutiveSummary(ExecutiveSummary {
        title: p.text(0)?,
        metrics: p.decode(1)?,
    }))
}

fn decode_table(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    let title = p.text(0)?;
    let headers = p.decode(1)?;
    let rows = p.decode(2)?;
    let options: TableOptions = p.opt_decode(3)?.unwrap_or_default();
    for (field, value) in [("fontSize", options.font_size), ("rowHeight", options.row_height)] {
        if value.is_some_and(|v| !(v.is_finite() && v > 0.0)) {
            return Err(SlideError::InvalidParam {
                index: 3,
                name: "options",
                reason: format!("{field} must be a positive number"),
            });
        }
    }
    Ok(SlideContent::DataTable(DataTable {
        title,
        headers,
        rows,
        options,
    }))
}

fn decode_framework(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::Framework(Framework {
        title: p.text(0)?,
        boxes: p.decode(1)?,
    }))
}

fn decode_timeline(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::Timeline(Timeline {
        title: p.text(0)?,
        phases: p.decode(1)?,
    }))
}

fn decode_key_messages(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::KeyMessages(KeyMessages {
        title: p.text(0)?,
        messages: p.decode(1)?,
    }))
}

fn decode_next_steps(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::NextSteps(NextSteps {
        title: p.text(0)?,
        steps: p.decode(1)?,
    }))
}

fn decode_section(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::SectionDivider(SectionDivider { heading: p.text(0)? }))
}

fn decode_numbered_framework(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::NumberedFramework(NumberedFramework {
        title: p.text(0)?,
        items: p.decode(1)?,
        closing_stat: p.opt_text(2)?,
    }))
}

fn decode_case_study(p: &Params<'_>) -> Result<SlideContent, SlideError> {
    Ok(SlideContent::CaseStudy(CaseStudy {
        title: p.text(0)?,
        case: p.decode(1)?,
    }))
}
