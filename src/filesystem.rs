use std::path::PathBuf;

#[cfg(target_os = "android")]
fn android_files_dir() -> Option<PathBuf> {
    use jni::{objects::{JObject, JString}, JavaVM};
    unsafe {
        let ctx = ndk_context::android_context();
        let vm = JavaVM::from_raw(ctx.vm().cast()).ok()?;
        let mut env = vm.attach_current_thread().ok()?; // mutable for JNI calls
        let activity = JObject::from_raw(ctx.context().cast());
        let files_dir = env
            .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])
            .ok()?
            .l()
            .ok()?;
        let abs_path_obj = env
            .call_method(files_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
            .ok()?
            .l()
            .ok()?;
        let abs_path_jstring: JString = JString::from(abs_path_obj);
        let abs_path: String = env.get_string(&abs_path_jstring).ok()?.into();
        Some(PathBuf::from(abs_path))
    }
}

/// Get the app data directory for the current platform
pub fn get_app_data_dir() -> PathBuf {
    #[cfg(target_os = "android")]
    {
        if let Some(dir) = android_files_dir() { return dir; }
        // Fallbacks
        for d in [
            "/data/user/0/dev.smarttracker.labs/files",
            "/data/data/dev.smarttracker.labs/files",
        ] {
            let p = PathBuf::from(d);
            if p.exists() { return p; }
        }
        PathBuf::from("./data")
    }

    #[cfg(not(target_os = "android"))]
    {
        // On desktop, use ./data directory
        PathBuf::from("./data")
    }
}

/// Path of the SQLite file backing the key-value store
pub fn get_database_path() -> PathBuf {
    get_app_data_dir().join("smarttracker.db")
}

/// Path of the optional TOML configuration file
pub fn get_config_path() -> PathBuf {
    get_app_data_dir().join("smarttracker.toml")
}

/// Returns true for URIs that point at a local file rather than a remote resource
pub fn is_local_file_uri(uri: &str) -> bool {
    !(uri.starts_with("http://")
        || uri.starts_with("https://")
        || uri.starts_with("data:")
        || uri.is_empty())
}

/// Strips a `file://` scheme, if any
pub fn local_path_from_uri(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}
