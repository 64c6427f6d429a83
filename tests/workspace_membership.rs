use std::fs;

#[test]
fn workspace_members_exist() {
    let root = env!("CARGO_MANIFEST_DIR");
    let cargo = fs::read_to_string(format!("{root}/Cargo.toml")).expect("Failed to read Cargo.toml");

    for member in ["crates/secfmt-core", "crates/secfmt-cli"] {
        assert!(
            cargo.contains(member),
            "Cargo.toml workspace members must include {member}"
        );
        let manifest = format!("{root}/{member}/Cargo.toml");
        assert!(
            fs::metadata(&manifest).is_ok(),
            "{manifest} must exist for a listed workspace member"
        );
    }
}

/// Returns the body of a `[section]` table in a manifest, up to the next table.
fn manifest_section<'a>(manifest: &'a str, section: &str) -> &'a str {
    let header = format!("[{section}]\n");
    let Some(start) = manifest.find(&header) else {
        return "";
    };
    let body = &manifest[start + header.len()..];
    let end = body.find("\n[").map_or(body.len(), |i| i + 1);
    &body[..end]
}

#[test]
fn core_runtime_dependencies_are_library_only() {
    let root = env!("CARGO_MANIFEST_DIR");
    let manifest = fs::read_to_string(format!("{root}/crates/secfmt-core/Cargo.toml"))
        .expect("Failed to read secfmt-core Cargo.toml");

    let deps = manifest_section(&manifest, "dependencies");
    assert!(!deps.is_empty(), "secfmt-core must have a [dependencies] table");
    for test_only in ["serde_json", "anyhow"] {
        assert!(
            !deps.lines().any(|l| l.trim_start().starts_with(test_only)),
            "{test_only} must not be a runtime dependency of secfmt-core"
        );
    }

    let dev_deps = manifest_section(&manifest, "dev-dependencies");
    assert!(
        dev_deps.lines().any(|l| l.starts_with("serde_json")),
        "serde_json belongs in secfmt-core [dev-dependencies]"
    );
}
