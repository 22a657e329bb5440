/// Join `segments` onto `base` with single slashes between them.
///
/// Leading slashes on segments and trailing slashes on `base` are dropped,
/// so `join_path("/librechat/api/", &["/files", "images"])` gives
/// `/librechat/api/files/images`.
pub fn join_path(base: &str, segments: &[&str]) -> String {
    let mut path = base.trim_end_matches('/').to_string();
    for seg in segments {
        path.push('/');
        path.push_str(seg.trim_start_matches('/'));
    }
    path
}
