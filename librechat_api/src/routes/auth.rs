use super::api;

pub fn login() -> String {
    api(&["auth", "login"])
}

pub fn logout() -> String {
    api(&["auth", "logout"])
}

pub fn register() -> String {
    api(&["auth", "register"])
}

pub fn login_facebook() -> String {
    api(&["auth", "facebook"])
}

pub fn login_google() -> String {
    api(&["auth", "google"])
}

/// Token refresh. `?retry=true` is only added for a retried refresh.
pub fn refresh_token(retry: bool) -> String {
    let mut url = api(&["auth", "refresh"]);
    if retry {
        url.push_str("?retry=true");
    }
    url
}

pub fn request_password_reset() -> String {
    api(&["auth", "requestPasswordReset"])
}

pub fn reset_password() -> String {
    api(&["auth", "resetPassword"])
}

/* Two-factor */

pub fn enable_two_factor() -> String {
    api(&["auth", "2fa", "enable"])
}

pub fn verify_two_factor() -> String {
    api(&["auth", "2fa", "verify"])
}

pub fn confirm_two_factor() -> String {
    api(&["auth", "2fa", "confirm"])
}

pub fn disable_two_factor() -> String {
    api(&["auth", "2fa", "disable"])
}

pub fn regenerate_backup_codes() -> String {
    api(&["auth", "2fa", "backup", "regenerate"])
}

/// Verification with the temporary token issued mid-login.
pub fn verify_two_factor_temp() -> String {
    api(&["auth", "2fa", "verify-temp"])
}
