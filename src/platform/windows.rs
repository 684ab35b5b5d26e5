use super::Platform;

pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Get the Windows version number via wmic
    #[cfg(target_os = "windows")]
    fn wmic_version(&self) -> Option<String> {
        use std::process::Command;

        let output = Command::new("wmic")
            .args(["os", "get", "Version", "/value"])
            .output()
            .ok()?;

        let stdout = String::from_utf8(output.stdout).ok()?;

        for line in stdout.lines() {
            let line = line.trim();
            if let Some(version) = line.strip_prefix("Version=") {
                if !version.is_empty() {
                    return Some(version.to_string());
                }
            }
        }

        None
    }

    #[cfg(not(target_os = "windows"))]
    fn wmic_version(&self) -> Option<String> {
        None
    }
}

impl Platform for WindowsPlatform {
    fn os_name(&self) -> String {
        "Windows".to_string()
    }

    fn os_version(&self) -> String {
        self.wmic_version()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
