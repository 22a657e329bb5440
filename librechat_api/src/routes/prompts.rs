use super::{api, with_query, with_required_query, with_search_params};
use crate::query::QueryParams;
use crate::util::join_path;

pub fn prompts() -> String {
    api(&["prompts"])
}

pub fn get_prompt_group(id: &str) -> String {
    api(&["prompts", "groups", id])
}

pub fn get_prompt_groups_with_filters(filter: &QueryParams) -> String {
    with_search_params(api(&["prompts", "groups"]), filter)
}

pub fn get_prompts_with_filters(filter: &QueryParams) -> String {
    with_search_params(prompts(), filter)
}

pub fn get_prompt(id: &str) -> String {
    api(&["prompts", id])
}

pub fn get_random_prompts(limit: u32, skip: u32) -> String {
    let params = QueryParams::new().with("limit", limit).with("skip", skip);
    with_query(api(&["prompts", "random"]), &params)
}

pub fn post_prompt() -> String {
    prompts()
}

pub fn update_prompt_group(id: &str) -> String {
    get_prompt_group(id)
}

pub fn update_prompt_labels(id: &str) -> String {
    join_path(&get_prompt(id), &["labels"])
}

/// Marks a prompt as the production version of its group.
pub fn update_prompt_tag(id: &str) -> String {
    join_path(&get_prompt(id), &["tags", "production"])
}

pub fn delete_prompt_group(id: &str) -> String {
    get_prompt_group(id)
}

pub fn delete_prompt(id: &str, group_id: &str) -> String {
    with_required_query(get_prompt(id), "groupId", group_id, &QueryParams::new())
}

pub fn get_categories() -> String {
    api(&["categories"])
}

pub fn get_all_prompt_groups() -> String {
    api(&["prompts", "all"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_use_search_params() {
        let filter = QueryParams::new()
            .with("pageSize", 10u32)
            .with("name", "code review")
            .with("category", "");
        assert_eq!(
            get_prompt_groups_with_filters(&filter),
            "/librechat/api/prompts/groups?pageSize=10&name=code+review&category="
        );
        assert_eq!(get_prompts_with_filters(&QueryParams::new()), "/librechat/api/prompts");
    }

    #[test]
    fn random_prompts_keep_zero_skip() {
        assert_eq!(get_random_prompts(5, 0), "/librechat/api/prompts/random?limit=5&skip=0");
    }

    #[test]
    fn prompt_paths() {
        assert_eq!(update_prompt_tag("p1"), "/librechat/api/prompts/p1/tags/production");
        assert_eq!(delete_prompt("p1", "g1"), "/librechat/api/prompts/p1?groupId=g1");
        assert_eq!(delete_prompt("p1", ""), "/librechat/api/prompts/p1?groupId=");
        assert_eq!(delete_prompt_group("g1"), "/librechat/api/prompts/groups/g1");
    }
}
