//! Wire shape of a vaccine document on the content service.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentDocument {
    pub description: String,
    #[serde(default)]
    pub webpage: Option<String>,
    #[serde(default)]
    pub main_entity_of_page: Vec<ContentEntity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentEntity {
    pub identifier: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub has_part: Vec<ContentPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentPart {
    #[serde(default)]
    pub text: String,
}

impl ContentDocument {
    pub(crate) fn entity(&self, identifier: &str) -> Option<&ContentEntity> {
        self.main_entity_of_page.iter().find(|entity| entity.identifier == identifier)
    }
}
