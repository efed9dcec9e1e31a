//! Shared fixtures for the integration tests.

use std::fs;

use tempfile::TempDir;

/// Write one `.html` file per page, each linking to its targets.
pub fn write_corpus(pages: &[(&str, &[&str])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, links) in pages {
        let anchors: String = links
            .iter()
            .map(|target| format!("<li><a href=\"{target}\">{target}</a></li>\n"))
            .collect();
        let html = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{name}</title></head>\n<body>\n<ul>\n{anchors}</ul>\n</body>\n</html>\n"
        );
        fs::write(dir.path().join(name), html).unwrap();
    }
    dir
}

/// The four-page corpus where `2.html` collects most inbound links
pub fn hub_corpus() -> TempDir {
    write_corpus(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html"]),
        ("4.html", &["2.html"]),
    ])
}
