//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `bootseq 0.1.0 (2026-10-16, abc1234)`
pub fn version_line() -> String {
    format!(
        "bootseq {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_package_version() {
        let line = version_line();
        assert!(line.starts_with("bootseq "));
        assert!(line.contains(env!("CARGO_PKG_VERSION")));
        assert!(line.contains(BUILD_DATE));
    }
}
