//! Product description assembly from metafields.
//!
//! A generated description has up to three sections, in this order:
//!
//! 1. the plain description text (a rich-text metafield),
//! 2. a "How to Take" heading followed by the instructions,
//! 3. a "Key Ingredients" heading followed by one name per ingredient.
//!
//! Sections are joined with [`SECTION_SEPARATOR`]. A missing section is not
//! an error: it is recorded on the result so the caller can report it, and
//! the remaining sections are still assembled.

use core::fmt;

use serde_json::Value;

/// Markup placed between consecutive description pieces.
pub const SECTION_SEPARATOR: &str = "<br /><br />";

/// One of the three generated description sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Plain description text.
    Description,
    /// "How to take" instructions.
    HowToTake,
    /// Ingredient list.
    KeyIngredients,
}

impl Section {
    /// Log message used when this section is blank for `title`.
    #[must_use]
    pub fn blank_message(self, title: &str) -> String {
        match self {
            Self::Description => format!("Product description for {title} is blank!"),
            Self::HowToTake => format!("How to Take section for {title} is blank!"),
            Self::KeyIngredients => format!("Key ingredients section for {title} is blank!"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Description => write!(f, "description"),
            Self::HowToTake => write!(f, "how to take"),
            Self::KeyIngredients => write!(f, "key ingredients"),
        }
    }
}

/// Text of a rich-text metafield: the first text node of the first block.
///
/// Shopify stores rich text as `{"type":"root","children":[{"type":"paragraph",
/// "children":[{"type":"text","value":"..."}]}]}`. Returns `None` when the
/// value has another shape or the text is empty.
#[must_use]
pub fn rich_text_value(value: &Value) -> Option<&str> {
    value
        .pointer("/children/0/children/0/value")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Text of the "how to take" metafield.
///
/// The metafield is normally a single-line text field, in which case its JSON
/// value is the string itself. A rich-text field is accepted too.
#[must_use]
pub fn how_to_take_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::Object(_) => rich_text_value(value),
        _ => None,
    }
}

/// One entry of the ingredient list metafield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientRef<'a> {
    /// A string entry, normally a metaobject global ID.
    Reference(&'a str),
    /// An entry that is not a string and can never resolve.
    Malformed(&'a Value),
}

impl IngredientRef<'_> {
    /// The reference string, if the entry is one.
    #[must_use]
    pub const fn as_str(&self) -> Option<&str> {
        match self {
            Self::Reference(s) => Some(*s),
            Self::Malformed(_) => None,
        }
    }
}

impl fmt::Display for IngredientRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(s) => f.write_str(s),
            Self::Malformed(value) => write!(f, "{value}"),
        }
    }
}

/// Entries of the ingredient list metafield, in list order.
///
/// Returns `None` if the value is not an array.
#[must_use]
pub fn ingredient_refs(value: &Value) -> Option<Vec<IngredientRef<'_>>> {
    value.as_array().map(|items| {
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map_or(IngredientRef::Malformed(item), IngredientRef::Reference)
            })
            .collect()
    })
}

/// The result of assembling a description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedDescription {
    /// Description HTML.
    pub html: String,
    /// Sections that were blank, in section order.
    pub missing: Vec<Section>,
}

impl ComposedDescription {
    /// Whether no section produced any content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Incremental builder for a product description.
///
/// # Example
///
/// ```
/// use descsync_core::{DescriptionBuilder, Section};
///
/// let mut builder = DescriptionBuilder::new("Collagen");
/// builder.description(Some("Supports skin."));
/// builder.how_to_take(None);
/// builder.key_ingredients(Some(vec!["Hydrolysed collagen".to_string()]));
/// let composed = builder.finish();
///
/// assert_eq!(
///     composed.html,
///     "Supports skin.<br /><br /><b>Key Ingredients</b><br /><br />Hydrolysed collagen"
/// );
/// assert_eq!(composed.missing, vec![Section::HowToTake]);
/// ```
#[derive(Debug)]
pub struct DescriptionBuilder<'a> {
    title: &'a str,
    parts: Vec<String>,
    missing: Vec<Section>,
}

impl<'a> DescriptionBuilder<'a> {
    /// Start a description for the product titled `title`.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            parts: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Add the plain description text.
    pub fn description(&mut self, text: Option<&str>) -> &mut Self {
        match text {
            Some(text) => self.parts.push(text.to_owned()),
            None => self.missing.push(Section::Description),
        }
        self
    }

    /// Add the "How to Take" heading and instructions.
    pub fn how_to_take(&mut self, text: Option<&str>) -> &mut Self {
        match text {
            Some(text) => {
                self.parts.push(format!("<b>How to Take {}</b>", self.title));
                self.parts.push(text.to_owned());
            }
            None => self.missing.push(Section::HowToTake),
        }
        self
    }

    /// Add the "Key Ingredients" heading and the resolved ingredient names.
    ///
    /// An empty list still emits the heading: the metafield exists, it just
    /// has no entries that resolved.
    pub fn key_ingredients(&mut self, names: Option<Vec<String>>) -> &mut Self {
        match names {
            Some(names) => {
                self.parts.push("<b>Key Ingredients</b>".to_owned());
                self.parts.extend(names);
            }
            None => self.missing.push(Section::KeyIngredients),
        }
        self
    }

    /// Join the collected pieces.
    #[must_use]
    pub fn finish(self) -> ComposedDescription {
        ComposedDescription {
            html: self.parts.join(SECTION_SEPARATOR),
            missing: self.missing,
        }
    }
}
