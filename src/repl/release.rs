pub const GIT_HASH: &str = env!("GIT_HASH");

pub fn session_header() -> String {
    let dev = if GIT_HASH.is_empty() || GIT_HASH == "unknown" {
        String::from("")
    } else {
        format!(" (dev {:.8})", GIT_HASH)
    };

    format!("rindex version {}{dev}", env!("CARGO_PKG_VERSION"))
}
