/// Lexically cleans a URL path into its canonical rooted form: leading `/`,
/// forward slashes only, no `.` or `..` segments, no trailing slash except
/// for the root itself.
///
/// The input is treated as rooted whether or not it starts with `/`, so
/// `..` segments can never climb above the root; they pop what is on the
/// stack and otherwise vanish.
pub(crate) fn clean_url_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            segment => stack.push(segment),
        }
    }

    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}
