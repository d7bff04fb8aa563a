use crate::config::Config;
use serde::Serialize;

/// Input every page supplies to the metadata builder.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub path: String,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            noindex: false,
        }
    }

    /// Keep this page out of search indexes regardless of the global flag.
    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

/// The full tag set rendered into a page head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub og_site_name: String,
    pub og_type: String,
    pub twitter_card: String,
}

/// Build the tag set for one page. Page titles get the site-name suffix;
/// the canonical URL is the site origin joined with the page path.
pub fn build_meta(config: &Config, page: &PageMeta) -> MetaTags {
    let canonical = format!("{}{}", config.site_url.trim_end_matches('/'), page.path);
    let robots = if page.noindex || !config.indexing_enabled {
        "noindex, nofollow"
    } else {
        "index, follow"
    };

    MetaTags {
        title: format!("{} | {}", page.title, config.site_name),
        description: page.description.clone(),
        canonical: canonical.clone(),
        robots: robots.to_string(),
        og_title: page.title.clone(),
        og_description: page.description.clone(),
        og_url: canonical,
        og_site_name: config.site_name.clone(),
        og_type: "website".to_string(),
        twitter_card: "summary_large_image".to_string(),
    }
}

/// robots.txt body: allow or disallow everything per the global indexing
/// flag, always pointing crawlers at the sitemap.
pub fn robots_txt(config: &Config) -> String {
    let rule = if config.indexing_enabled {
        "Allow: /"
    } else {
        "Disallow: /"
    };

    format!(
        "User-agent: *\n{}\n\nSitemap: {}/sitemap.xml\n",
        rule,
        config.site_url.trim_end_matches('/')
    )
}
