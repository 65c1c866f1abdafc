/// Build description captured by `build.rs`.
pub fn git_describe() -> &'static str {
    env!("GIT_DESCRIBE").trim()
}

pub fn git_hash() -> &'static str {
    env!("GIT_HASH").trim()
}

pub fn print_report(name: &str) {
    println!("{{");
    println!("  \"name\": \"{}\",", name);
    println!("  \"version\": \"{}\",", env!("CARGO_PKG_VERSION"));
    println!("  \"git_describe\": \"{}\",", git_describe());
    println!("  \"git_hash\": \"{}\"", git_hash());
    println!("}}");
}
