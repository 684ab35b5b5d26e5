use super::Platform;

pub struct LinuxPlatform;

impl LinuxPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Get the running kernel release via uname
    #[cfg(target_os = "linux")]
    fn kernel_release(&self) -> Option<String> {
        use std::process::Command;

        Command::new("uname")
            .arg("-r")
            .output()
            .ok()
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Read /etc/os-release to get distribution info
    #[cfg(target_os = "linux")]
    fn read_os_release(&self) -> std::collections::HashMap<String, String> {
        use std::collections::HashMap;
        use std::fs;

        let mut map = HashMap::new();

        if let Ok(content) = fs::read_to_string("/etc/os-release") {
            for line in content.lines() {
                if let Some((key, value)) = line.split_once('=') {
                    let value = value.trim_matches('"').to_string();
                    map.insert(key.to_string(), value);
                }
            }
        }

        map
    }

    #[cfg(not(target_os = "linux"))]
    fn kernel_release(&self) -> Option<String> {
        None
    }

    #[cfg(not(target_os = "linux"))]
    fn read_os_release(&self) -> std::collections::HashMap<String, String> {
        std::collections::HashMap::new()
    }
}

impl Platform for LinuxPlatform {
    fn os_name(&self) -> String {
        // The channel contract reports the OS family, not the distribution
        "Linux".to_string()
    }

    fn os_version(&self) -> String {
        // Kernel release first, distribution version as fallback
        self.kernel_release()
            .or_else(|| {
                let os_release = self.read_os_release();
                os_release
                    .get("VERSION_ID")
                    .or_else(|| os_release.get("VERSION"))
                    .cloned()
            })
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
