use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory submission files are written to.
    pub dir: PathBuf,
    /// URL path prefix under which uploads are served back.
    pub public_path: String,
    /// Upload size ceiling in bytes.
    pub max_bytes: usize,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            public_path: env::var("UPLOAD_PUBLIC_PATH").unwrap_or_else(|_| "/files".to_string()),
            max_bytes: env::var("UPLOAD_MAX_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10 * 1024 * 1024), // 10 MB
        }
    }
}
