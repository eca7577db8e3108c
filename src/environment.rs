use std::env::consts::{ARCH, FAMILY, OS};
use std::fs;

/// Host descriptions shown in the header. Display only.
#[derive(Debug, Clone)]
pub struct EnvironmentInfo {
    pub operating_system: String,
    pub runtime: String,
}

impl EnvironmentInfo {
    pub fn capture() -> Self {
        let info = Self {
            operating_system: operating_system_info(),
            runtime: runtime_info(),
        };
        tracing::info!(os = %info.operating_system, runtime = %info.runtime, "captured environment");
        info
    }
}

/// OS description followed by the processor architecture.
pub fn operating_system_info() -> String {
    format!("{} ({})", os_description(), ARCH)
}

/// Runtime description followed by a `<os>-<arch>` platform identifier.
pub fn runtime_info() -> String {
    format!(
        "{} {} / Rust std ({}) ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        FAMILY,
        platform_identifier()
    )
}

pub fn platform_identifier() -> String {
    format!("{OS}-{ARCH}")
}

fn os_description() -> String {
    fs::read_to_string("/etc/os-release")
        .ok()
        .and_then(|content| pretty_name(&content))
        .unwrap_or_else(|| OS.to_string())
}

fn pretty_name(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|v| v.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
}
