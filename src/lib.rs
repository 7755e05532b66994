pub mod config;
pub mod html;
pub mod mention;
pub mod syntax;
pub mod transform;

use std::io;

pub use config::Config;
pub use config::ConfigBuilder;
pub use html::{parse_html, to_html};
pub use mention::Mention;
pub use syntax::{Element, Node, Properties, Root};
pub use transform::{TransformStats, apply_mention_transform, apply_mention_transform_with};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rewrites the mentions in an HTML fragment.
///
/// Parses `input`, runs the mention transform and serializes the result.
///
/// # Examples
///
/// ```rust
/// let html = r#"<p>Hi @[Ann](user-1)!</p>"#;
/// let out = atmention::transform_html(html, None).unwrap();
/// assert_eq!(
///     out,
///     r#"<p>Hi <span data-type="mention" data-id="user-1">@Ann</span>!</p>"#
/// );
/// ```
///
/// # Arguments
///
/// * `input` - The HTML fragment to transform
/// * `config` - Optional configuration (defaults to default config)
pub fn transform_html(input: &str, config: Option<Config>) -> io::Result<String> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let mut tree = html::parse_html(input);
    let stats = transform::apply_mention_transform_with(&mut tree, &config);
    log::debug!("Transform created {} mention(s)", stats.mentions());

    html::to_html(&tree)
}

/// Transforms an HTML fragment and returns the mentions it contains, in
/// document order. Mentions already present as annotations are included.
pub fn extract_mentions(input: &str, config: Option<Config>) -> Vec<Mention> {
    let config = config.unwrap_or_default();
    let mut tree = html::parse_html(input);
    transform::apply_mention_transform_with(&mut tree, &config);
    mention::collect_mentions(&tree.children)
}
