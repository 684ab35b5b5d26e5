use super::Platform;

pub struct MacOsPlatform;

impl MacOsPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Query the macOS version database using sw_vers
    #[cfg(target_os = "macos")]
    fn sw_vers_output(&self, flag: &str) -> Option<String> {
        use std::process::Command;

        Command::new("sw_vers")
            .arg(flag)
            .output()
            .ok()
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    #[cfg(not(target_os = "macos"))]
    fn sw_vers_output(&self, _flag: &str) -> Option<String> {
        None
    }
}

impl Platform for MacOsPlatform {
    fn os_name(&self) -> String {
        "macOS".to_string()
    }

    fn os_version(&self) -> String {
        self.sw_vers_output("-productVersion")
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
