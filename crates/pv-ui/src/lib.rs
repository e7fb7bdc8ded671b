//! postview/crates/pv-ui/src/lib.rs
//!
//! The HTML surface of the view: a fixed heading, then either one block per
//! post (keyed by id) or the loading paragraph. Askama escapes interpolated
//! text by default, which is exactly what we want for remote-supplied titles
//! and bodies.

use askama::Template;
use pv_core::models::Post;

#[derive(Template)]
#[template(path = "post_list.html")]
pub struct PostListTemplate<'a> {
    /// Rendered in sequence order; the order is the endpoint's.
    pub posts: &'a [Post],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, body: &str) -> Post {
        Post { id, title: title.into(), body: body.into() }
    }

    #[test]
    fn renders_heading_and_one_block_per_post() {
        let posts = vec![post(1, "T1", "B1"), post(2, "T2", "B2")];
        let html = PostListTemplate { posts: &posts }.render().unwrap();

        assert!(html.contains("<h1>Data Fetching Example</h1>"));
        assert_eq!(html.matches("<h3>").count(), 2);
        assert!(html.contains("<div id=\"post-1\">"));
        assert!(html.contains("<h3>T1</h3>"));
        assert!(html.contains("<p>B1</p>"));
        assert!(html.contains("<h3>T2</h3>"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn blocks_appear_in_sequence_order() {
        let posts = vec![post(9, "last", "z"), post(1, "first", "a")];
        let html = PostListTemplate { posts: &posts }.render().unwrap();

        let idx_last = html.find("<h3>last</h3>").unwrap();
        let idx_first = html.find("<h3>first</h3>").unwrap();
        assert!(idx_last < idx_first, "order must be the sequence's, not the ids'");
    }

    #[test]
    fn sentinel_renders_as_one_empty_block() {
        let posts = vec![pv_core::models::PLACEHOLDER_POST.clone()];
        let html = PostListTemplate { posts: &posts }.render().unwrap();

        assert!(html.contains("<div id=\"post-0\">"));
        assert!(html.contains("<h3></h3>"));
        assert!(html.contains("<p></p>"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn empty_sequence_shows_loading_paragraph() {
        let html = PostListTemplate { posts: &[] }.render().unwrap();
        assert!(html.contains("<p>Loading...</p>"));
        assert!(!html.contains("<h3>"));
    }

    #[test]
    fn remote_text_is_escaped() {
        let posts = vec![post(1, "<script>x</script>", "a & b")];
        let html = PostListTemplate { posts: &posts }.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
