use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const RELEASE_OWNER: &str = "autostyle";
const RELEASE_REPO: &str = "autostyle";

/// Request timeout in seconds
const REQUEST_TIMEOUT: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub name: String,
    #[serde(default)]
    pub body: String,
    pub html_url: String,
    pub published_at: String,
    pub prerelease: bool,
}

impl ReleaseInfo {
    /// Get the version string (tag_name without 'v' prefix)
    pub fn version(&self) -> String {
        self.tag_name.trim_start_matches('v').to_string()
    }
}

#[derive(Debug, Clone)]
pub enum UpdateCheckResult {
    NoUpdate,
    UpdateAvailable(ReleaseInfo),
    Error(String),
}

/// Compare two semantic versions
/// Returns true if remote is newer than current
pub fn is_newer_version(current: &str, remote: &str) -> bool {
    match (semver::Version::parse(current), semver::Version::parse(remote)) {
        (Ok(curr), Ok(rem)) => rem > curr,
        _ => false, // If parsing fails, assume not newer
    }
}

/// Check if enough time has passed since last check (24 hours)
pub fn should_check_now(last_check_timestamp: i64) -> bool {
    let now = current_timestamp();
    let twenty_four_hours = 24 * 60 * 60;
    (now - last_check_timestamp) >= twenty_four_hours
}

/// Fetch the latest release from GitHub
pub fn fetch_latest_release(owner: &str, repo: &str) -> Result<ReleaseInfo, String> {
    let url = format!("https://api.github.com/repos/{}/{}/releases/latest", owner, repo);

    let response = minreq::get(&url)
        .with_header("User-Agent", "AutoStyle")
        .with_timeout(REQUEST_TIMEOUT)
        .send()
        .map_err(|e| format!("Failed to connect to update server: {}", e))?;

    if !(200..300).contains(&response.status_code) {
        return Err(format!(
            "Update server returned error: {}",
            response.status_code
        ));
    }

    response
        .json::<ReleaseInfo>()
        .map_err(|e| format!("Failed to parse update information: {}", e))
}

/// Check for updates given current version and settings
pub fn check_for_updates(current_version: &str, skipped_versions: &[String]) -> UpdateCheckResult {
    let release = match fetch_latest_release(RELEASE_OWNER, RELEASE_REPO) {
        Ok(r) => r,
        Err(e) => return UpdateCheckResult::Error(e),
    };

    let remote_version = release.version();

    // Check if this version is skipped by user
    if skipped_versions.iter().any(|v| *v == remote_version) {
        return UpdateCheckResult::NoUpdate;
    }

    if is_newer_version(current_version, &remote_version) {
        UpdateCheckResult::UpdateAvailable(release)
    } else {
        UpdateCheckResult::NoUpdate
    }
}

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
