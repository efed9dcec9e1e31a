//! Page corpus: which pages exist and where they link

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mapping from page name to the pages it links to.
///
/// Links only point at pages present in the corpus and never at the page
/// itself. Every page is a key, including pages without outbound links.
/// Pages iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from raw page → link data.
    ///
    /// Links to unknown pages and self-links are dropped. Repeated pages have
    /// their links merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimax_pagerank::pagerank::Corpus;
    ///
    /// let corpus = Corpus::from_links([
    ///     ("1.html", vec!["2.html", "1.html", "missing.html"]),
    ///     ("2.html", vec![]),
    /// ]);
    /// assert_eq!(corpus.out_degree("1.html"), Some(1));
    /// assert_eq!(corpus.out_degree("2.html"), Some(0));
    /// ```
    pub fn from_links<I, P, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let known: BTreeSet<String> = raw.keys().cloned().collect();
        let pages = raw
            .into_iter()
            .map(|(page, links)| {
                let links = links
                    .into_iter()
                    .filter(|link| *link != page && known.contains(link))
                    .collect();
                (page, links)
            })
            .collect();

        Corpus { pages }
    }

    /// Read every `.html` file in `directory` and link pages by their anchors.
    ///
    /// The directory is not searched recursively. Page names are file names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory or one of its pages cannot be read.
    pub fn crawl(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        let entries = fs::read_dir(directory).map_err(|e| {
            Error::io(format!("read corpus directory {}", directory.display()), e)
        })?;

        let mut raw = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::io(format!("list corpus directory {}", directory.display()), e)
            })?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".html") || !path.is_file() {
                continue;
            }

            let contents = fs::read_to_string(&path)
                .map_err(|e| Error::io(format!("read page {}", path.display()), e))?;
            let links = extract_links(&contents);
            debug!("{name}: {} raw links", links.len());
            raw.push((name.to_string(), links));
        }

        let corpus = Self::from_links(raw);
        info!(
            "crawled {} pages ({} links) from {}",
            corpus.len(),
            corpus.link_count(),
            directory.display()
        );
        Ok(corpus)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check if `page` is part of the corpus
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Page names in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Outbound links of `page`, `None` for unknown pages
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.links(page).map(BTreeSet::len)
    }

    /// Iterate over (page, outbound links) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of links in the corpus
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }

    /// Pages that link to `page`, in lexicographic order
    pub fn inbound(&self, page: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, links)| links.contains(page))
            .map(|(source, _)| source)
            .collect()
    }

    /// Pages without outbound links
    pub fn dangling_pages(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
            .collect()
    }
}

/// Collect the `href` targets of every `<a ...>` tag in an HTML document.
///
/// Only double-quoted attribute values are recognised, and the first `href`
/// inside a tag wins.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    let mut links = BTreeSet::new();
    let mut rest = html;

    while let Some(start) = rest.find("<a") {
        let after = &rest[start + 2..];
        if !after.starts_with(char::is_whitespace) {
            rest = after;
            continue;
        }

        let tag_end = after.find('>').unwrap_or(after.len());
        let tag = &after[..tag_end];
        if let Some(href) = tag.find("href=\"") {
            let value = &tag[href + "href=\"".len()..];
            if let Some(close) = value.find('"') {
                links.insert(value[..close].to_string());
            }
        }
        rest = &after[tag_end..];
    }

    links
}
