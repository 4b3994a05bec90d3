use std::collections::HashMap;
use std::path::{Path, PathBuf};

// From `openssl dgst -sha256` and `openssl x509 -issuer -serial -nameopt RFC2253` on
// fixtures/certificate.der.
#[allow(dead_code)]
pub const GOLDEN_DIGEST_BASE64: &str = "CA9QLivl6ZXZMEMgI/E+NybfT1vi7MC646V33Y/3anA=";
#[allow(dead_code)]
pub const GOLDEN_ISSUER: &str = "CN=Invois Test CA,O=Invois Test Org,C=MY";
#[allow(dead_code)]
pub const GOLDEN_SERIAL: &str = "5A3F19C2D4E6B7081F";

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("read fixture")
}

#[allow(dead_code)]
pub fn fixture_bytes(name: &str) -> Vec<u8> {
    std::fs::read(fixture(name)).expect("read fixture")
}

#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Writes `content` to `relative` under `root`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dirs");
    }
    std::fs::write(&path, content).expect("write file");
    path
}
