use super::api;

pub fn presets() -> String {
    api(&["presets"])
}

pub fn delete_preset() -> String {
    api(&["presets", "delete"])
}

pub fn ai_endpoints() -> String {
    api(&["endpoints"])
}

pub fn endpoints_config_override() -> String {
    api(&["endpoints", "config", "override"])
}

pub fn models() -> String {
    api(&["models"])
}

pub fn tokenizer() -> String {
    api(&["tokenizer"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_and_model_paths() {
        assert_eq!(presets(), "/librechat/api/presets");
        assert_eq!(delete_preset(), "/librechat/api/presets/delete");
        assert_eq!(ai_endpoints(), "/librechat/api/endpoints");
        assert_eq!(endpoints_config_override(), "/librechat/api/endpoints/config/override");
        assert_eq!(models(), "/librechat/api/models");
        assert_eq!(tokenizer(), "/librechat/api/tokenizer");
    }
}
