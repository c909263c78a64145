//! Parameter metadata derived from operation struct fields

use serde::Serialize;

/// Parameter type as it travels over JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
}

/// Metadata about a parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamMeta {
    /// Field name
    pub name: &'static str,
    /// Description (from doc comment)
    pub description: &'static str,
    /// Parameter type
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Whether the field must be supplied
    pub required: bool,
    /// Short flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Alternative names accepted on input
    #[serde(skip_serializing_if = "no_aliases")]
    pub aliases: &'static [&'static str],
}

fn no_aliases(aliases: &&'static [&'static str]) -> bool {
    aliases.is_empty()
}

impl ParamMeta {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            param_type: ParamType::String,
            required: false,
            short: None,
            aliases: &[],
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn description(mut self, desc: &'static str) -> Self {
        self.description = desc;
        self
    }

    pub const fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    pub const fn aliases(mut self, a: &'static [&'static str]) -> Self {
        self.aliases = a;
        self
    }

    pub const fn param_type(mut self, t: ParamType) -> Self {
        self.param_type = t;
        self
    }

    /// Set short flag from Option (for macro compatibility)
    pub const fn short_opt(mut self, c: Option<char>) -> Self {
        self.short = c;
        self
    }
}
