#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
mod linux;

/// Platform abstraction trait for the host OS queries the plugin answers
pub trait Platform: Send + Sync {
    /// Get the operating system name
    fn os_name(&self) -> String;

    /// Get the operating system version
    fn os_version(&self) -> String;
}

/// Get the current platform implementation
pub fn current() -> Box<dyn Platform> {
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacOsPlatform::new())
    }

    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsPlatform::new())
    }

    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxPlatform::new())
    }
}
