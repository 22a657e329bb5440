use std::fmt::Display;

use super::{api, files, with_search_params};
use crate::query::{QueryParams, QueryValue};
use crate::types::queries::AssistantsEndpoint;
use crate::util::join_path;

/// Target of an assistants request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantsRoute {
    /// API version, `v{version}` in the path.
    pub version: String,
    /// Sub-path below the versioned root.
    pub path: Option<String>,
    pub options: QueryParams,
    /// Added to the options as `endpoint`.
    pub endpoint: Option<AssistantsEndpoint>,
    /// Address the assistant avatar upload instead of the API.
    pub is_avatar: bool,
}

impl AssistantsRoute {
    pub fn new(version: impl Display) -> Self {
        Self {
            version: version.to_string(),
            ..Default::default()
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.options.insert(key, value);
        self
    }

    pub fn endpoint(mut self, endpoint: AssistantsEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn avatar(mut self) -> Self {
        self.is_avatar = true;
        self
    }
}

pub fn assistants(route: &AssistantsRoute) -> String {
    let base = if route.is_avatar {
        join_path(&files::images(), &["assistants"])
    } else {
        api(&["assistants", format!("v{}", route.version).as_str()])
    };

    let url = match route.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => join_path(&base, &[path]),
        None => base,
    };

    let mut options = route.options.clone();
    if let Some(endpoint) = route.endpoint {
        options.insert("endpoint", endpoint.as_str());
    }

    with_search_params(url, &options)
}

pub fn agents(path: Option<&str>, options: Option<&QueryParams>) -> String {
    let root = api(&["agents"]);
    let url = match path.filter(|p| !p.is_empty()) {
        Some(path) => join_path(&root, &[path]),
        None => root,
    };

    match options {
        Some(options) => with_search_params(url, options),
        None => url,
    }
}

pub fn revert_agent_version(agent_id: &str) -> String {
    agents(Some(format!("{agent_id}/revert").as_str()), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_assistants_root() {
        assert_eq!(assistants(&AssistantsRoute::new(2)), "/librechat/api/assistants/v2");
        assert_eq!(
            assistants(&AssistantsRoute::new("1").path("tools")),
            "/librechat/api/assistants/v1/tools"
        );
    }

    #[test]
    fn endpoint_is_merged_into_options() {
        let route = AssistantsRoute::new(2)
            .path("documents")
            .option("limit", 20u32)
            .endpoint(AssistantsEndpoint::AzureAssistants);
        assert_eq!(
            assistants(&route),
            "/librechat/api/assistants/v2/documents?limit=20&endpoint=azureAssistants"
        );
    }

    #[test]
    fn null_options_are_left_out() {
        let route = AssistantsRoute::new(2)
            .option("after", QueryValue::Null)
            .option("before", Option::<&str>::None);
        assert_eq!(assistants(&route), "/librechat/api/assistants/v2");

        let route = route.option("limit", 5u32);
        assert_eq!(assistants(&route), "/librechat/api/assistants/v2?limit=5");
    }

    #[test]
    fn avatar_goes_through_files() {
        let route = AssistantsRoute::new(1).path("asst_1/avatar").avatar();
        assert_eq!(assistants(&route), "/librechat/api/files/images/assistants/asst_1/avatar");
    }

    #[test]
    fn agent_routes() {
        assert_eq!(agents(None, None), "/librechat/api/agents");
        let options = QueryParams::new().with("requiredPermission", 1u32);
        assert_eq!(
            agents(Some("a1"), Some(&options)),
            "/librechat/api/agents/a1?requiredPermission=1"
        );
        assert_eq!(revert_agent_version("a1"), "/librechat/api/agents/a1/revert");
    }
}
