use std::fmt;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux and other Unix-likes without a dedicated variant.
    Linux,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Operating system.
    pub os: Os,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    /// Create a platform with an explicit OS.
    #[must_use]
    pub const fn new(os: Os) -> Self {
        Self { os }
    }

    /// Returns `true` on Windows.
    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(self.os, Os::Windows)
    }

    /// File name of the vcpkg bootstrap script shipped in the vcpkg checkout.
    #[must_use]
    pub const fn vcpkg_bootstrap_script(&self) -> &'static str {
        if self.is_windows() {
            "bootstrap-vcpkg.bat"
        } else {
            "bootstrap-vcpkg.sh"
        }
    }

    /// File name of the vcpkg executable produced by bootstrapping.
    #[must_use]
    pub const fn vcpkg_executable(&self) -> &'static str {
        if self.is_windows() { "vcpkg.exe" } else { "vcpkg" }
    }

    /// CMake generator written into presets when none is configured.
    #[must_use]
    pub const fn default_generator(&self) -> &'static str {
        if self.is_windows() {
            "Visual Studio 17 2022"
        } else {
            "Unix Makefiles"
        }
    }

    const fn detect_os() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            // Default to Linux for other Unix-like systems
            Os::Linux
        }
    }
}
