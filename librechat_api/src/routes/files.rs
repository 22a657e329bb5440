use super::api;
use crate::util::join_path;

pub fn files() -> String {
    api(&["files"])
}

pub fn file_upload() -> String {
    files()
}

pub fn file_delete() -> String {
    files()
}

pub fn file_download(user_id: &str, file_id: &str) -> String {
    api(&["files", "download", user_id, file_id])
}

pub fn file_config() -> String {
    api(&["files", "config"])
}

pub fn agent_files(agent_id: &str) -> String {
    api(&["files", "agent", agent_id])
}

pub fn images() -> String {
    join_path(&files(), &["images"])
}

pub fn avatar() -> String {
    join_path(&images(), &["avatar"])
}

pub fn speech() -> String {
    join_path(&files(), &["speech"])
}

pub fn speech_to_text() -> String {
    join_path(&speech(), &["stt"])
}

pub fn text_to_speech() -> String {
    join_path(&speech(), &["tts"])
}

pub fn text_to_speech_manual() -> String {
    join_path(&text_to_speech(), &["manual"])
}

pub fn text_to_speech_voices() -> String {
    join_path(&text_to_speech(), &["voices"])
}

pub fn get_custom_config_speech() -> String {
    join_path(&speech(), &["config", "get"])
}
