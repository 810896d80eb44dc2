use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjectTo {
    #[default]
    Head,
    HeadPrepend,
    Body,
    BodyPrepend,
}

/// A tag the build tool merges into the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTag {
    pub tag: String,
    pub inject_to: InjectTo,
    pub attrs: BTreeMap<String, String>,
}

impl HtmlTag {
    pub fn script(src: impl Into<String>) -> Self {
        Self {
            tag: "script".to_string(),
            inject_to: InjectTo::Head,
            attrs: BTreeMap::from([("src".to_string(), src.into())]),
        }
    }

    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            tag: "link".to_string(),
            inject_to: InjectTo::Head,
            attrs: BTreeMap::from([
                ("href".to_string(), href.into()),
                ("rel".to_string(), "stylesheet".to_string()),
                ("type".to_string(), "text/css".to_string()),
            ]),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}
