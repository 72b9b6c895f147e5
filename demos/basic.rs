use rusturl::Url;

fn main() {
    // Parse a simple URL
    let mut url = Url::parse("https://example.com:8080/path?query=value#hash")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://example.com:8080/path?query=value#hash
    println!("Scheme: {}", url.scheme()); // https
    println!("Host: {:?}", url.host_str()); // Some("example.com")
    println!("Port: {:?}", url.port()); // Some(8080)
    println!("Path: {}", url.path()); // /path
    println!("Query: {:?}", url.query()); // Some("query=value")
    println!("Fragment: {:?}", url.fragment()); // Some("hash")

    // Mutate components in place
    url.set_port("443").expect("Failed to set port");
    url.set_path("docs/../guide").expect("Failed to set path");
    url.set_query("");
    println!("Updated: {url}"); // https://example.com/guide#hash

    // Resolve and relativize
    let next = url.join("intro?lang=en").expect("Failed to join");
    println!("Joined: {next}"); // https://example.com/intro?lang=en
    println!("Relative: {:?}", url.make_relative(&next)); // Some("intro?lang=en")
}
